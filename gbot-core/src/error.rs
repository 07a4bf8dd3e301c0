use thiserror::Error;

/// The one error type of the bridge. Every failure surfaces as a variant with a
/// human-readable message; completion failures also carry the underlying error.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Completion error: {message}")]
    Completion {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BridgeError {
    /// Completion failure wrapping the original error as its source.
    pub fn completion(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BridgeError::Completion {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Completion failure with no underlying error (e.g. an empty choice list).
    pub fn completion_msg(message: impl Into<String>) -> Self {
        BridgeError::Completion {
            message: message.into(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
