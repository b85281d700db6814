//! Error types for bulk moderation submissions.

use thiserror::Error;

/// Primary error type for composing and sending bulk moderation actions.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Action control value was outside the recognized set.
    #[error("unrecognized moderation action")]
    InvalidActionKind {
        /// Raw control value provided by the display surface.
        value: String,
    },
    /// Server answered the submission with a non-success status.
    #[error("moderation request rejected")]
    RequestRejected {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body text, verbatim.
        body: String,
    },
    /// Request payload could not be serialized.
    #[error("failed to encode request payload")]
    Encode {
        /// Underlying serializer failure.
        #[source]
        source: serde_json::Error,
    },
    /// Transport-level failure before any status was available.
    #[error("moderation request failed to send")]
    Transport {
        /// Underlying transport failure.
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience alias for moderation operation results.
pub type ModerationResult<T> = Result<T, ModerationError>;
