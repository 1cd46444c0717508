use crate::domain::CompletionMode;

pub const SUMMARY_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that analyzes PDF documents. Extract the main points and create a summary.";
pub const QUESTION_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that answers questions about documents. Use only the provided document text to answer questions. If the answer isn't in the document, say so clearly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmCategory {
    Harassment,
    HateSpeech,
    SexuallyExplicit,
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmCategory::Harassment => "HARM_CATEGORY_HARASSMENT",
            HarmCategory::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
            HarmCategory::SexuallyExplicit => "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            HarmCategory::DangerousContent => "HARM_CATEGORY_DANGEROUS_CONTENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockThreshold {
    BlockMediumAndAbove,
}

impl BlockThreshold {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockThreshold::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: BlockThreshold,
}

/// Fixed generation parameters. Not user-adjustable; derived from the completion mode.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
    pub safety_settings: Vec<SafetySetting>,
    pub system_instruction: &'static str,
}

impl GenerationConfig {
    pub fn for_mode(mode: CompletionMode) -> Self {
        let safety_settings = HarmCategory::ALL
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: BlockThreshold::BlockMediumAndAbove,
            })
            .collect();

        match mode {
            CompletionMode::Summary => Self {
                temperature: 0.3,
                max_output_tokens: 4096,
                top_k: 32,
                top_p: 0.95,
                safety_settings,
                system_instruction: SUMMARY_SYSTEM_INSTRUCTION,
            },
            CompletionMode::Question => Self {
                temperature: 0.2,
                max_output_tokens: 2048,
                top_k: 32,
                top_p: 0.95,
                safety_settings,
                system_instruction: QUESTION_SYSTEM_INSTRUCTION,
            },
        }
    }
}
