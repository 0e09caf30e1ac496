use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z]*\s*").expect("fence pattern is valid"));
static FENCE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*$").expect("fence pattern is valid"));

/// Removes a leading ```` ```lang ```` fence and a trailing ```` ``` ```` fence.
///
/// LLM responses regularly wrap raw HTML or data blocks in markdown fences
/// even when told not to; this keeps only the payload.
pub fn strip_code_fences(text: &str) -> String {
    let text = text.trim();
    let text = FENCE_OPEN.replace(text, "");
    let text = FENCE_CLOSE.replace(&text, "");
    text.trim().to_string()
}

/// Extracts the JSON object embedded in a response.
///
/// Strips fences first, then slices from the first `{` to the last `}` so
/// that prose before or after the object does not break parsing. Returns the
/// cleaned text unchanged when no brace pair is present.
pub fn extract_json_object(text: &str) -> String {
    let clean = strip_code_fences(text);
    match (clean.find('{'), clean.rfind('}')) {
        (Some(first), Some(last)) if first < last => clean[first..=last].to_string(),
        _ => clean,
    }
}
