use thiserror::Error;

/// Result type for the shorten operation.
pub type Result<T> = std::result::Result<T, ShortenError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// A required input was absent. Checked before any network call.
    #[error("{0} is required")]
    MissingInput(&'static str),
    /// The target is not a well-formed http(s) URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The tracker rejected or never acknowledged the creation call.
    #[error("short link creation failed: {0}")]
    Create(String),
}
