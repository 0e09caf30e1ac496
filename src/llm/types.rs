use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageAttachment;

/// One provider call. The model id travels with the request because the
/// pipeline picks a different model per operation (tool vs. coding).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    #[serde(default)]
    pub system: Option<String>,
    pub prompt: String,
    /// JSON schema the response must conform to. Only the structured
    /// provider enforces it; the chat provider downgrades to json mode.
    #[serde(default)]
    pub schema: Option<Value>,
    #[serde(default)]
    pub json_mode: bool,
    #[serde(default)]
    pub image: Option<ImageAttachment>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: None,
            prompt: prompt.into(),
            schema: None,
            json_mode: false,
            image: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Requesting a schema implies json mode.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self.json_mode = true;
        self
    }

    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: String,
    /// Full provider payload, kept for diagnostics.
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// A model identifier as advertised by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub id: String,
    pub name: String,
}

impl ModelOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
