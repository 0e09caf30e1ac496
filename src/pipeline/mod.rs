//! LLM orchestration: the four assisted transformation steps.
//!
//! Each operation builds a prompt, fires a single one-shot provider call,
//! strips markdown fences from the answer and logs every stage to the
//! session's request log. There is no retry policy; a failed call is logged
//! and propagated immediately.

pub mod prompts;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{CardForgeError, Result};
use crate::llm::{ApiConfig, DynLlmClient, ImageAttachment, LlmRequest};
use crate::log::{LogKind, RequestLog};
use crate::render::{extract_json_object, strip_code_fences};

pub use prompts::PromptBuilder;

/// Output of the generate-template operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBundle {
    pub regex: String,
    pub html: String,
}

/// Orchestrates the LLM-assisted steps of the authoring pipeline.
pub struct Pipeline {
    client: DynLlmClient,
    tool_model: String,
    coding_model: String,
    log: RequestLog,
}

impl Pipeline {
    pub fn new(client: DynLlmClient, config: &ApiConfig, log: RequestLog) -> Self {
        Self {
            client,
            tool_model: config.tool_model.clone(),
            coding_model: config.coding_model.clone(),
            log,
        }
    }

    /// Raw free text → structured `<CharData>` key/value block.
    pub async fn convert_raw_text(&self, raw_text: &str) -> Result<String> {
        self.log.append(
            LogKind::Info,
            "Converting raw text to CharData structure...",
        );

        let prompt = PromptBuilder::build_convert_prompt(raw_text);
        let content = self
            .dispatch(LlmRequest::new(&self.tool_model, prompt))
            .await?;
        Ok(strip_code_fences(&content))
    }

    /// Structured character data → `{regex, html}` pair via a
    /// schema-constrained call.
    pub async fn generate_template(&self, char_data: &str) -> Result<TemplateBundle> {
        self.log.append(
            LogKind::Info,
            "Generating template (regex + HTML) from CharData...",
        );

        let prompt = PromptBuilder::build_generate_prompt(char_data);
        let request =
            LlmRequest::new(&self.tool_model, prompt).with_schema(template_bundle_schema());
        let content = self.dispatch(request).await?;

        let cleaned = extract_json_object(&content);
        let bundle: TemplateBundle = serde_json::from_str(&cleaned).map_err(|e| {
            let error =
                CardForgeError::Serialization(format!("template response is not valid JSON: {}", e));
            self.log.append(LogKind::Error, error.to_string());
            error
        })?;

        Ok(TemplateBundle {
            regex: bundle.regex,
            html: strip_code_fences(&bundle.html),
        })
    }

    /// Rewrites the current HTML template following an instruction, with an
    /// optional reference image.
    pub async fn modify_template(
        &self,
        current_html: &str,
        instruction: &str,
        image: Option<ImageAttachment>,
    ) -> Result<String> {
        let note = if image.is_some() {
            "Modifying HTML template. (Image attached)"
        } else {
            "Modifying HTML template."
        };
        self.log.append(LogKind::Info, note);

        let prompt = PromptBuilder::build_modify_prompt(current_html, instruction);
        let mut request = LlmRequest::new(&self.coding_model, prompt);
        if let Some(image) = image {
            request = request.with_image(image);
        }

        let content = self.dispatch(request).await?;
        Ok(strip_code_fences(&content))
    }

    /// Blank-slate "inspiration" template built around the given placeholder
    /// keys.
    pub async fn generate_inspiration(&self, keys: &[String]) -> Result<String> {
        self.log.append(
            LogKind::Info,
            format!("Generating inspiration using keys: {}", keys.join(", ")),
        );

        let prompt = PromptBuilder::build_inspiration_prompt(keys);
        let content = self
            .dispatch(LlmRequest::new(&self.coding_model, prompt))
            .await?;
        Ok(strip_code_fences(&content))
    }

    /// Logs the request, runs it, logs the response or the error.
    async fn dispatch(&self, request: LlmRequest) -> Result<String> {
        let mut logged = request.prompt.clone();
        if request.image.is_some() {
            logged.push_str("\n[+ image data]");
        }
        self.log.append(LogKind::Request, logged);

        match self.client.complete(request).await {
            Ok(response) => {
                self.log.append(LogKind::Response, response.content.clone());
                Ok(response.content)
            }
            Err(error) => {
                self.log.append(LogKind::Error, error.to_string());
                Err(error)
            }
        }
    }
}

/// Response schema for the generate-template operation. Only the structured
/// provider enforces it; the chat provider falls back to json mode.
fn template_bundle_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "regex": { "type": "STRING" },
            "html": { "type": "STRING" }
        },
        "required": ["regex", "html"]
    })
}
