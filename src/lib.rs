pub mod defaults;
pub mod error;
pub mod llm;
pub mod log;
pub mod pipeline;
pub mod render;
pub mod session;
pub mod utils;

pub use error::{CardForgeError, Result};
pub use llm::{
    ApiConfig, DynLlmClient, ImageAttachment, LlmClient, LlmClientFactory, LlmRequest,
    LlmResponse, LocalEchoClient, ModelOption, ProviderKind, ScriptedClient,
};
pub use log::{LogEntry, LogKind, RequestLog};
pub use pipeline::{Pipeline, PromptBuilder, TemplateBundle};
pub use render::{
    extract_json_object, placeholder_keys, render, strip_code_fences, substitute, RenderError,
    RenderOutcome,
};
pub use session::{RequestGuard, Session};
pub use utils::{ConfigValidator, LoggingConfig};

#[cfg(feature = "llm-client")]
pub use llm::{ChatHttpClient, StructuredHttpClient};
