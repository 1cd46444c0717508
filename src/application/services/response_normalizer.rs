//! Best-effort parsing of free-form model output.
//!
//! The summary grammar is a convention the prompt asks for, not something the
//! model guarantees:
//!
//! * a line containing `title:` (any case) carries the title after the marker;
//! * a line whose trimmed form starts with `N.` is a summary point;
//! * every other line is ignored.
//!
//! When no point is recognised the whole completion becomes the single point.
//! The only structural promise made to callers is that the point list is
//! never empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AnalysisResult;

pub const ANSWER_FALLBACK: &str = "Sorry, I couldn't generate an answer.";

static TITLE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)title:").unwrap());
static NUMBERED_POINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

pub fn normalize_summary(raw: &str) -> AnalysisResult {
    let mut title = None;
    let mut points = Vec::new();

    for line in raw.lines() {
        if let Some(marker) = TITLE_MARKER.find(line) {
            let candidate = line[marker.end()..].trim().trim_matches('*').trim();
            title = (!candidate.is_empty()).then(|| candidate.to_string());
            continue;
        }

        let trimmed = line.trim();
        if let Some(prefix) = NUMBERED_POINT.find(trimmed) {
            let point = trimmed[prefix.end()..].trim();
            if !point.is_empty() {
                points.push(point.to_string());
            }
        }
    }

    if points.is_empty() {
        tracing::debug!(
            raw_chars = raw.len(),
            "No numbered points recognised, falling back to raw completion"
        );
    }

    AnalysisResult::new(title, points, raw)
}

pub fn normalize_answer(raw: &str) -> String {
    if raw.trim().is_empty() {
        ANSWER_FALLBACK.to_string()
    } else {
        raw.to_string()
    }
}
