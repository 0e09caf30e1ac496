use std::sync::Arc;

use async_trait::async_trait;

use super::types::{LlmRequest, LlmResponse, ModelOption};
use crate::error::Result;

/// Seam between the pipeline and a concrete provider backend.
///
/// Calls are one-shot: no retry, no streaming, no cancellation beyond the
/// HTTP client's own timeouts. A failed call surfaces immediately.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse>;

    /// Enumerates the model identifiers this provider offers.
    async fn list_models(&self) -> Result<Vec<ModelOption>>;
}

pub type DynLlmClient = Arc<dyn LlmClient>;
