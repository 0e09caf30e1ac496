use crate::error::Result;
use crate::llm::client::DynLlmClient;
use crate::llm::config::ApiConfig;

/// Builds the provider client matching an `ApiConfig`.
pub struct LlmClientFactory;

#[cfg(feature = "llm-client")]
impl LlmClientFactory {
    pub fn create_client(config: &ApiConfig) -> Result<DynLlmClient> {
        use std::sync::Arc;

        use crate::error::CardForgeError;
        use crate::llm::config::ProviderKind;
        use crate::llm::http::{ChatHttpClient, StructuredHttpClient};
        use crate::utils::validation::ConfigValidator;

        ConfigValidator::validate_api_key(&config.api_key)?;
        ConfigValidator::validate_model_id(&config.tool_model)?;
        ConfigValidator::validate_model_id(&config.coding_model)?;

        match config.provider {
            ProviderKind::Structured => {
                let client = match &config.base_url {
                    Some(base_url) => {
                        ConfigValidator::validate_base_url(base_url)?;
                        StructuredHttpClient::with_base_url(base_url, &config.api_key)
                    }
                    None => StructuredHttpClient::new(&config.api_key),
                };
                Ok(Arc::new(client))
            }
            ProviderKind::Chat => {
                let base_url = config
                    .base_url
                    .as_deref()
                    .ok_or(CardForgeError::MissingBaseUrl)?;
                ConfigValidator::validate_base_url(base_url)?;
                Ok(Arc::new(ChatHttpClient::new(base_url, &config.api_key)))
            }
        }
    }
}

#[cfg(not(feature = "llm-client"))]
impl LlmClientFactory {
    pub fn create_client(_config: &ApiConfig) -> Result<DynLlmClient> {
        Err(crate::error::CardForgeError::Config(
            "cardforge was built without the `llm-client` feature".to_string(),
        ))
    }
}
