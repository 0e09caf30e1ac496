use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::client::LlmClient;
use super::types::{LlmRequest, LlmResponse, ModelOption};
use crate::error::{CardForgeError, Result};

/// In-process client that echoes the prompt back. Useful for wiring checks
/// without network access.
#[derive(Default, Clone)]
pub struct LocalEchoClient;

#[async_trait]
impl LlmClient for LocalEchoClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        Ok(LlmResponse {
            content: format!("[Echo] {}", request.prompt),
            metadata: None,
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelOption>> {
        Ok(vec![ModelOption::new("local-echo", "Local Echo")])
    }
}

/// Test client that replays a scripted sequence of responses and records
/// every request it receives.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<String>>,
    seen: Mutex<Vec<LlmRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(responses.into_iter().map(Into::into).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: impl Into<String>) {
        self.replies.lock().push_back(response.into());
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        self.seen.lock().push(request);
        let content = self
            .replies
            .lock()
            .pop_front()
            .ok_or_else(|| CardForgeError::Other(anyhow::anyhow!("scripted client ran out of responses")))?;
        Ok(LlmResponse {
            content,
            metadata: None,
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelOption>> {
        Ok(vec![ModelOption::new("scripted", "Scripted")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_client_echoes_prompt() {
        let client = LocalEchoClient;
        let response = client
            .complete(LlmRequest::new("local-echo", "hello"))
            .await
            .unwrap();
        assert_eq!(response.content, "[Echo] hello");
    }

    #[tokio::test]
    async fn test_scripted_client_replays_in_order() {
        let client = ScriptedClient::with_responses(["one", "two"]);
        let first = client.complete(LlmRequest::new("m", "a")).await.unwrap();
        let second = client.complete(LlmRequest::new("m", "b")).await.unwrap();
        assert_eq!(first.content, "one");
        assert_eq!(second.content, "two");
        assert!(client.complete(LlmRequest::new("m", "c")).await.is_err());
        assert_eq!(client.requests().len(), 3);
    }
}
