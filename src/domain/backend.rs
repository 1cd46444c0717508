use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Hosted text-generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Gemini => "gemini",
            Backend::OpenAi => "openai",
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Backend::Gemini),
            "openai" => Ok(Backend::OpenAi),
            other => Err(format!(
                "Invalid backend: {}. Expected: gemini or openai",
                other
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
