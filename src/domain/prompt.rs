use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionMode {
    Summary,
    Question,
}

impl CompletionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionMode::Summary => "summary",
            CompletionMode::Question => "question",
        }
    }
}

impl fmt::Display for CompletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    mode: CompletionMode,
}

impl Prompt {
    pub fn new(text: String, mode: CompletionMode) -> Self {
        Self { text, mode }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> CompletionMode {
        self.mode
    }
}
