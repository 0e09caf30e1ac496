use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardForgeError>;

#[derive(Debug, Error)]
pub enum CardForgeError {
    #[error("API key is missing")]
    MissingApiKey,
    #[error("base URL is required for the chat-completion provider")]
    MissingBaseUrl,
    #[error("another request is already in flight")]
    Busy,
    #[error("provider request failed with status {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
