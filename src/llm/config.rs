use serde::{Deserialize, Serialize};

use crate::defaults;

/// Which provider backend a session talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Vendor-specific API with schema-constrained JSON responses.
    Structured,
    /// OpenAI-compatible `/chat/completions` API.
    Chat,
}

/// Provider configuration, held only in session memory.
///
/// Replaces the original's module-global mutable provider state with an
/// explicit struct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    /// Required for the chat provider; overrides the built-in endpoint for
    /// the structured one.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model for data conversion and template generation.
    pub tool_model: String,
    /// Model for HTML design and modification work.
    pub coding_model: String,
}

impl ApiConfig {
    pub fn structured(api_key: impl Into<String>) -> Self {
        Self {
            provider: ProviderKind::Structured,
            api_key: api_key.into(),
            base_url: None,
            tool_model: defaults::DEFAULT_TOOL_MODEL.to_string(),
            coding_model: defaults::DEFAULT_CODING_MODEL.to_string(),
        }
    }

    pub fn chat(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider: ProviderKind::Chat,
            api_key: api_key.into(),
            base_url: Some(base_url.into()),
            tool_model: defaults::DEFAULT_TOOL_MODEL.to_string(),
            coding_model: defaults::DEFAULT_CODING_MODEL.to_string(),
        }
    }

    pub fn with_models(
        mut self,
        tool_model: impl Into<String>,
        coding_model: impl Into<String>,
    ) -> Self {
        self.tool_model = tool_model.into();
        self.coding_model = coding_model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_config_defaults() {
        let config = ApiConfig::structured("key");
        assert_eq!(config.provider, ProviderKind::Structured);
        assert!(config.base_url.is_none());
        assert_eq!(config.tool_model, defaults::DEFAULT_TOOL_MODEL);
    }

    #[test]
    fn test_chat_config_with_models() {
        let config =
            ApiConfig::chat("key", "https://api.example.com/v1").with_models("small", "large");
        assert_eq!(config.provider, ProviderKind::Chat);
        assert_eq!(config.tool_model, "small");
        assert_eq!(config.coding_model, "large");
    }
}
