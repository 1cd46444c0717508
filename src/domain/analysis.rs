use serde::Serialize;

/// Structured summary produced from a model completion.
///
/// `summary_points` is never empty: when the completion carried no numbered
/// points it holds the raw completion as its only entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub title: Option<String>,
    pub summary_points: Vec<String>,
}

impl AnalysisResult {
    pub fn new(title: Option<String>, summary_points: Vec<String>, raw: &str) -> Self {
        let summary_points = if summary_points.is_empty() {
            vec![raw.to_string()]
        } else {
            summary_points
        };

        Self {
            title,
            summary_points,
        }
    }
}

/// Sequence number of one summarization request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnalysisTicket(u64);

impl AnalysisTicket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Applied(AnalysisResult),
    /// A newer summarization was started while this one was in flight; its result was dropped.
    Superseded {
        ticket: AnalysisTicket,
        latest: AnalysisTicket,
    },
}
