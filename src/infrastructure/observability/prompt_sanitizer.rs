use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static KEY_VALUE_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer |x-goog-api-key: ?|x-api-key: ?|api_key=|key=|password=|secret=|token=)[^\s&"']+"#)
        .unwrap()
});
static PROVIDER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bsk-[A-Za-z0-9_\-]{8,}|AIza[0-9A-Za-z_\-]{20,}").unwrap());

/// Shortens user-supplied text for log output and masks anything that looks like a credential.
///
/// Redaction runs on the whole text before the cut, so a key spanning the
/// visible boundary is still masked.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secrets(trimmed);
    let total_chars = redacted.chars().count();
    if total_chars <= MAX_VISIBLE_CHARS {
        return redacted;
    }

    let head: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{head}... ({total_chars} chars total)")
}

fn redact_secrets(text: &str) -> String {
    let masked = KEY_VALUE_SECRET.replace_all(text, "${1}[REDACTED]");
    PROVIDER_KEY.replace_all(&masked, "[REDACTED]").into_owned()
}
