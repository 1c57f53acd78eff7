//! Error types for tree construction, proof handling and the CLI harness.

use thiserror::Error;

/// Construction misuse. A failed build leaves nothing behind.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Too many items: {count} exceeds configured limit of {limit}")]
    TooManyItems { count: usize, limit: usize },

    #[error("Leaf count overflow: cannot pad {0} items to a power of two")]
    LeafCountOverflow(usize),
}

/// Proof decoding errors. Verification turns these into a `false` result.
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    #[error("Proof too deep: {depth} levels exceeds limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Errors surfaced by the CLI harness
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item not committed to by this tree: {0:?}")]
    ItemNotFound(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
