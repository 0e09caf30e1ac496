use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::defaults;
use crate::error::{CardForgeError, Result};
use crate::llm::{ApiConfig, LlmClientFactory};
use crate::log::RequestLog;
use crate::pipeline::Pipeline;
use crate::render::{render, RenderOutcome};

/// One editing session: the three text buffers, the provider configuration
/// and the request log. Nothing here survives the process; configuration
/// lives only in session memory.
pub struct Session {
    char_data: String,
    pattern: String,
    template: String,
    config: Option<ApiConfig>,
    log: RequestLog,
    /// Memoized result of the last render; dropped whenever an input changes.
    cached: Option<RenderOutcome>,
    in_flight: Arc<AtomicBool>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            char_data: defaults::DEFAULT_CHAR_DATA.to_string(),
            pattern: defaults::DEFAULT_PATTERN.to_string(),
            template: defaults::DEFAULT_TEMPLATE.to_string(),
            config: None,
            log: RequestLog::new(),
            cached: None,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn char_data(&self) -> &str {
        &self.char_data
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_char_data(&mut self, char_data: impl Into<String>) {
        self.char_data = char_data.into();
        self.cached = None;
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.cached = None;
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
        self.cached = None;
    }

    /// Renders the current inputs, reusing the memoized outcome when nothing
    /// changed since the last call.
    pub fn render(&mut self) -> RenderOutcome {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }
        let outcome = render(&self.pattern, &self.char_data, &self.template);
        self.cached = Some(outcome.clone());
        outcome
    }

    /// Names of the variables the current pattern extracts from the current
    /// data. Feeds the inspiration operation.
    pub fn variable_names(&mut self) -> Vec<String> {
        self.render().variables.keys().cloned().collect()
    }

    pub fn config(&self) -> Option<&ApiConfig> {
        self.config.as_ref()
    }

    pub fn set_config(&mut self, config: ApiConfig) {
        self.config = Some(config);
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }

    pub fn clear_log(&self) {
        self.log.clear();
    }

    /// Builds a pipeline from the session configuration.
    pub fn pipeline(&self) -> Result<Pipeline> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| CardForgeError::Config("API is not configured".to_string()))?;
        let client = LlmClientFactory::create_client(config)?;
        Ok(Pipeline::new(client, config, self.log.clone()))
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Claims the single in-flight slot. While the returned guard is alive
    /// any further claim fails with `Busy`, which keeps user actions from
    /// firing re-entrant LLM calls.
    pub fn begin_request(&self) -> Result<RequestGuard> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(CardForgeError::Busy);
        }
        Ok(RequestGuard {
            flag: Arc::clone(&self.in_flight),
        })
    }
}

/// RAII handle for the in-flight flag; dropping it frees the slot.
pub struct RequestGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;

    #[test]
    fn test_default_session_renders() {
        let mut session = Session::new();
        let outcome = session.render();
        assert!(outcome.is_ok());
        assert!(!outcome.variables.is_empty());
    }

    #[test]
    fn test_render_is_memoized_until_input_changes() {
        let mut session = Session::new();
        let first = session.render();
        let second = session.render();
        assert_eq!(first, second);

        session.set_pattern("(?<Broken");
        let third = session.render();
        assert!(matches!(third.error, Some(RenderError::InvalidPattern(_))));
    }

    #[test]
    fn test_begin_request_blocks_reentry() {
        let session = Session::new();
        let guard = session.begin_request().unwrap();
        assert!(session.is_loading());
        assert!(matches!(session.begin_request(), Err(CardForgeError::Busy)));

        drop(guard);
        assert!(!session.is_loading());
        assert!(session.begin_request().is_ok());
    }

    #[test]
    fn test_pipeline_requires_config() {
        let session = Session::new();
        assert!(matches!(
            session.pipeline(),
            Err(CardForgeError::Config(_))
        ));
    }

    #[test]
    fn test_variable_names_follow_the_pattern() {
        let mut session = Session::new();
        session.set_char_data(r#"<CharData>"Name": "Rook"</CharData>"#);
        session.set_pattern(r#""Name":\s*"(?<Name>[^"]*)""#);
        assert_eq!(session.variable_names(), vec!["Name".to_string()]);
    }
}
