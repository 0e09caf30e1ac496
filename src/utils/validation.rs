use crate::error::{CardForgeError, Result};

/// Configuration sanity checks run before a provider client is built.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_api_key(api_key: &str) -> Result<()> {
        if api_key.is_empty() {
            return Err(CardForgeError::MissingApiKey);
        }

        if api_key.starts_with("your_") || (api_key.starts_with("sk-") && api_key.len() < 20) {
            return Err(CardForgeError::Config(
                "API key looks like a placeholder; provide a real key".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_base_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(CardForgeError::Config("base URL must not be empty".to_string()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CardForgeError::Config(format!(
                "base URL `{}` must start with http:// or https://",
                url
            )));
        }

        Ok(())
    }

    pub fn validate_model_id(model: &str) -> Result<()> {
        if model.is_empty() {
            return Err(CardForgeError::Config("model id must not be empty".to_string()));
        }

        if model.chars().any(char::is_whitespace) {
            return Err(CardForgeError::Config(format!(
                "model id `{}` must not contain whitespace",
                model
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key() {
        assert!(ConfigValidator::validate_api_key("").is_err());
        assert!(ConfigValidator::validate_api_key("your_api_key_here").is_err());
        assert!(ConfigValidator::validate_api_key("sk-short").is_err());
        assert!(ConfigValidator::validate_api_key("sk-1234567890abcdef1234567890").is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(ConfigValidator::validate_base_url("").is_err());
        assert!(ConfigValidator::validate_base_url("example.com").is_err());
        assert!(ConfigValidator::validate_base_url("http://example.com").is_ok());
        assert!(ConfigValidator::validate_base_url("https://example.com/v1").is_ok());
    }

    #[test]
    fn test_validate_model_id() {
        assert!(ConfigValidator::validate_model_id("").is_err());
        assert!(ConfigValidator::validate_model_id("gpt 4").is_err());
        assert!(ConfigValidator::validate_model_id("gemini-3-flash-preview").is_ok());
    }
}
