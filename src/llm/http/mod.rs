//! HTTP provider backends.
//!
//! Two wire formats are supported:
//! - `StructuredHttpClient`: vendor API with schema-constrained JSON
//!   responses (`models/{model}:generateContent`).
//! - `ChatHttpClient`: OpenAI-compatible `/chat/completions` plus `/models`
//!   enumeration with bearer-token auth.

#[cfg(feature = "llm-client")]
pub mod chat;
#[cfg(feature = "llm-client")]
pub mod structured;

#[cfg(feature = "llm-client")]
pub use chat::ChatHttpClient;
#[cfg(feature = "llm-client")]
pub use structured::StructuredHttpClient;

/// Shared client settings: connection pooling plus connect and request
/// timeouts.
#[cfg(feature = "llm-client")]
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .connect_timeout(std::time::Duration::from_secs(10))
        .timeout(std::time::Duration::from_secs(300))
        .build()
        .expect("failed to build HTTP client with custom config")
}

/// Caps error-body excerpts so oversized payloads (base64 images and the
/// like) do not flood the log.
#[cfg(feature = "llm-client")]
pub(crate) fn truncate_excerpt(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} bytes total)", &text[..end], text.len())
}

#[cfg(all(test, feature = "llm-client"))]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_excerpt_short_text() {
        assert_eq!(truncate_excerpt("short", 500), "short");
    }

    #[test]
    fn test_truncate_excerpt_long_text() {
        let long = "x".repeat(600);
        let out = truncate_excerpt(&long, 500);
        assert!(out.starts_with(&"x".repeat(500)));
        assert!(out.contains("600 bytes total"));
    }

    #[test]
    fn test_truncate_excerpt_respects_char_boundaries() {
        let text = "é".repeat(300);
        let out = truncate_excerpt(&text, 501);
        assert!(out.contains("truncated"));
    }
}
