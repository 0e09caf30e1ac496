pub mod client;
pub mod config;
pub mod echo;
pub mod factory;
pub mod http;
pub mod image;
pub mod types;

pub use client::{DynLlmClient, LlmClient};
pub use config::{ApiConfig, ProviderKind};
pub use echo::{LocalEchoClient, ScriptedClient};
pub use factory::LlmClientFactory;
pub use self::image::ImageAttachment;
pub use types::{LlmRequest, LlmResponse, ModelOption};

#[cfg(feature = "llm-client")]
pub use http::{ChatHttpClient, StructuredHttpClient};
