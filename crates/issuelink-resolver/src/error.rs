use issuelink_core::CodecError;
use thiserror::Error;

/// Result type for the resolve operation.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The short code does not decode. Terminal: the UI shows its generic
    /// not-found page and no retry is offered.
    #[error("invalid short code: {0}")]
    InvalidCode(#[from] CodecError),
    /// The authenticated fetch failed. Retryable with another credential;
    /// the reason is not disclosed.
    #[error("short link lookup failed: {0}")]
    Fetch(String),
}
