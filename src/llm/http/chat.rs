use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use super::{build_http_client, truncate_excerpt};
use crate::error::{CardForgeError, Result};
use crate::llm::client::LlmClient;
use crate::llm::types::{LlmRequest, LlmResponse, ModelOption};

const EXCERPT_BYTES: usize = 500;

/// Client for OpenAI-compatible endpoints (Provider B).
///
/// POSTs to `{base}/chat/completions` with bearer auth and enumerates models
/// via GET `{base}/models`.
#[derive(Clone)]
pub struct ChatHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ChatHttpClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: build_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn build_body(request: &LlmRequest) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }

        let user_content: Value = match &request.image {
            Some(image) => json!([
                { "type": "text", "text": request.prompt },
                { "type": "image_url", "image_url": { "url": image.data_url() } }
            ]),
            None => json!(request.prompt),
        };
        messages.push(json!({ "role": "user", "content": user_content }));

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });
        if request.json_mode || request.schema.is_some() {
            // The chat wire format has no schema slot; downgrade to json mode.
            body["response_format"] = json!({ "type": "json_object" });
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }

    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CardForgeError::Other(anyhow::anyhow!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(CardForgeError::Provider {
                status: status.as_u16(),
                body: truncate_excerpt(&text, EXCERPT_BYTES),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            CardForgeError::Serialization(format!(
                "response parse error: {} (body: {})",
                e,
                truncate_excerpt(&text, EXCERPT_BYTES)
            ))
        })
    }
}

#[async_trait]
impl LlmClient for ChatHttpClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = Self::build_body(&request);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CardForgeError::Other(anyhow::anyhow!("HTTP request error: {}", e)))?;

        let payload = Self::read_json(response).await?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                CardForgeError::Serialization(format!(
                    "missing content in chat response: {}",
                    truncate_excerpt(&payload.to_string(), EXCERPT_BYTES)
                ))
            })?;

        Ok(LlmResponse {
            content,
            metadata: Some(payload),
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelOption>> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CardForgeError::Other(anyhow::anyhow!("HTTP request error: {}", e)))?;

        let payload = Self::read_json(response).await?;

        let models = payload["data"]
            .as_array()
            .ok_or_else(|| {
                CardForgeError::Serialization("invalid model response format".to_string())
            })?
            .iter()
            .filter_map(|entry| entry["id"].as_str())
            .map(|id| ModelOption::new(id, id))
            .collect();

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::image::ImageAttachment;

    #[test]
    fn test_build_body_plain_prompt() {
        let request = LlmRequest::new("gpt-x", "hi").with_system("be brief");
        let body = ChatHttpClient::build_body(&request);
        assert_eq!(body["model"], "gpt-x");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_build_body_json_mode() {
        let request = LlmRequest::new("gpt-x", "hi").with_json_mode();
        let body = ChatHttpClient::build_body(&request);
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_build_body_with_image_uses_data_url() {
        let request = LlmRequest::new("gpt-x", "look")
            .with_image(ImageAttachment::new("image/jpeg", "QUJD"));
        let body = ChatHttpClient::build_body(&request);
        let content = &body["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        assert_eq!(
            content[1]["image_url"]["url"],
            "data:image/jpeg;base64,QUJD"
        );
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let client = ChatHttpClient::new("https://api.example.com/v1///", "k");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }
}
