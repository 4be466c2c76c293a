//! Error types for the Volcano admission webhook

use kube::core::admission::Operation;
use thiserror::Error;

/// Reasons an admission object could not be turned into a Volcano Job
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The review targets a resource other than Volcano jobs
    #[error("expect resource to be {expected}, got {actual}")]
    ResourceMismatch {
        /// Resource the webhook serves (`group/version/resource`)
        expected: String,
        /// Resource declared by the review
        actual: String,
    },

    /// The object's own type metadata names a different kind
    #[error("expect object to be {expected}, got {actual}")]
    KindMismatch {
        /// Kind the webhook serves
        expected: String,
        /// Kind declared by the object
        actual: String,
    },

    /// The review carries no object to decode
    #[error("admission request has no object")]
    MissingObject,

    /// The object is not a well-formed Volcano Job
    #[error("failed to decode job: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Main error type for admission operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The admission object could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Jobs are only mutated when they are created
    #[error("expect operation to be 'CREATE'")]
    UnsupportedOperation(Operation),

    /// The patch document could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The webhook server failed to start or stopped with an error
    #[error("server error: {0}")]
    Server(String),
}

impl Error {
    /// Create a configuration error with the given message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error with the given message
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}
