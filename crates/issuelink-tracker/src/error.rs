use thiserror::Error;

/// The one message every failed fetch carries, whatever the upstream reason.
pub(crate) const FETCH_DENIED: &str = "record is missing or not visible";

/// Result type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failures from the external tracker.
///
/// `Fetch` covers not-found, unauthorized and rate-limited reads alike. The
/// upstream tracker answers identically for missing records and records the
/// caller may not see, and implementations must keep that ambiguity: the
/// variant, the message and anything else a caller can observe stay the same
/// across those cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The record-creation call failed (auth, network, quota). Not retried.
    #[error("record creation failed: {0}")]
    Create(String),
    /// The record-fetch call failed, for an undisclosed reason.
    #[error("record fetch failed: {0}")]
    Fetch(String),
}
