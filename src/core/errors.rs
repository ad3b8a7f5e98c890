//! Error types for translation calls

use thiserror::Error;

/// Everything that can go wrong during a translate call.
///
/// Failures are returned as soon as they happen. Nothing is retried and no
/// partial result is produced, so callers pick their own retry policy by
/// matching on the variant.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Endpoint or other configuration is unusable
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Request could not be sent or the response body could not be read
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Service answered with something other than 200 OK
    #[error("Failed to translate ({status}): {body}")]
    Remote {
        status: u16,
        body: String,
    },

    /// Response body is not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Number of translations differs from the number of inputs
    #[error("Translation count mismatch: sent {expected} texts, received {actual} translations")]
    CountMismatch {
        expected: usize,
        actual: usize,
    },
}

impl TranslationError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TranslationError::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
