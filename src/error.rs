//! Unified error types for look-format
//!
//! Every failure of a render call is reported through [`LookError`].

/// Unified error type for look-format operations
#[derive(Debug, thiserror::Error)]
pub enum LookError {
    /// Remote retrieval failed (non-success status or transport failure)
    #[error("Network error: {0}")]
    Network(String),

    /// Mount point selector did not resolve to an element
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Render options given as JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using LookError
pub type Result<T> = std::result::Result<T, LookError>;

impl LookError {
    /// Create a Network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an InvalidTarget error
    pub fn invalid_target(selector: impl Into<String>) -> Self {
        Self::InvalidTarget(selector.into())
    }
}
