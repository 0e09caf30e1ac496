use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use super::{build_http_client, truncate_excerpt};
use crate::defaults;
use crate::error::{CardForgeError, Result};
use crate::llm::client::LlmClient;
use crate::llm::types::{LlmRequest, LlmResponse, ModelOption};

const EXCERPT_BYTES: usize = 500;

/// Client for the schema-constrained vendor API (Provider A).
///
/// Requests go to `{base}/models/{model}:generateContent` with the API key in
/// a header. When a response schema is attached, the provider is asked for
/// `application/json` output conforming to it.
#[derive(Clone)]
pub struct StructuredHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StructuredHttpClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(defaults::STRUCTURED_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    fn build_body(request: &LlmRequest) -> Value {
        let mut parts = Vec::new();
        if let Some(image) = &request.image {
            parts.push(json!({
                "inlineData": {
                    "mimeType": image.mime,
                    "data": image.base64
                }
            }));
        }
        parts.push(json!({ "text": request.prompt }));

        let mut body = json!({ "contents": [{ "parts": parts }] });

        if let Some(system) = &request.system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        let mut generation = serde_json::Map::new();
        if let Some(schema) = &request.schema {
            generation.insert("responseSchema".to_string(), schema.clone());
            generation.insert("responseMimeType".to_string(), json!("application/json"));
        } else if request.json_mode {
            generation.insert("responseMimeType".to_string(), json!("application/json"));
        }
        if let Some(temperature) = request.temperature {
            generation.insert("temperature".to_string(), json!(temperature));
        }
        if !generation.is_empty() {
            body["generationConfig"] = Value::Object(generation);
        }

        body
    }

    async fn send(&self, model: &str, body: &Value) -> Result<Value> {
        let endpoint = self.endpoint(model);
        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| CardForgeError::Other(anyhow::anyhow!("HTTP request error: {}", e)))?;

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
impl LlmClient for StructuredHttpClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = Self::build_body(&request);
        let payload = self.send(&request.model, &body).await?;

        // A response may split its text across several parts.
        let content = payload["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                CardForgeError::Serialization(format!(
                    "missing content in structured response: {}",
                    truncate_excerpt(&payload.to_string(), EXCERPT_BYTES)
                ))
            })?;

        Ok(LlmResponse {
            content,
            metadata: Some(payload),
        })
    }

    /// The vendor has no cheap enumeration endpoint, so probe with a
    /// one-token call and return the known model pair on success.
    async fn list_models(&self) -> Result<Vec<ModelOption>> {
        let probe = json!({
            "contents": [{ "parts": [{ "text": "test" }] }],
            "generationConfig": { "maxOutputTokens": 1 }
        });
        self.send(defaults::DEFAULT_TOOL_MODEL, &probe).await?;

        Ok(defaults::STRUCTURED_MODEL_CHOICES
            .iter()
            .map(|(id, name)| ModelOption::new(*id, *name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::image::ImageAttachment;

    #[test]
    fn test_build_body_plain_prompt() {
        let request = LlmRequest::new("m", "hello");
        let body = StructuredHttpClient::build_body(&request);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_build_body_with_schema_requests_json() {
        let schema = json!({ "type": "OBJECT" });
        let request = LlmRequest::new("m", "p").with_schema(schema.clone());
        let body = StructuredHttpClient::build_body(&request);
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_build_body_with_image_puts_inline_data_first() {
        let request =
            LlmRequest::new("m", "describe").with_image(ImageAttachment::new("image/png", "AAAA"));
        let body = StructuredHttpClient::build_body(&request);
        assert_eq!(body["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(body["contents"][0]["parts"][1]["text"], "describe");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = StructuredHttpClient::with_base_url("https://api.example.com/v1/", "k");
        assert_eq!(
            client.endpoint("my-model"),
            "https://api.example.com/v1/models/my-model:generateContent"
        );
    }
}
