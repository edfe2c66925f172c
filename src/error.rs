//! Error types for the quoting engine.

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The room analysis cannot support a meaningful calculation
    /// (missing or non-positive floor area, non-finite dimensions).
    #[error("Invalid room analysis: {0}")]
    InvalidRoom(String),

    /// A supplied catalog could not be decoded.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidCatalog(e.to_string())
    }
}
