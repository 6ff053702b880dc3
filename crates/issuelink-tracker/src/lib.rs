//! External issue-tracker capability for issuelink.
//!
//! The tracker owns every record: this system reads and writes records only
//! through the two operations below and keeps no copy beyond the current
//! response. [`GithubTracker`] is the production implementation over the
//! GitHub Issues REST API; [`InMemoryTracker`] backs tests and offline use.

pub mod credential;
pub mod error;
pub mod github;
pub mod memory;

pub use credential::Credential;
pub use error::{Result, TrackerError};
pub use github::{GithubConfig, GithubTracker};
pub use memory::InMemoryTracker;

use async_trait::async_trait;
use issuelink_core::RecordId;

/// The external issue tracker, reduced to the two operations this system
/// uses.
#[async_trait]
pub trait IssueTracker: Send + Sync + 'static {
    /// Creates a new record whose body is `body` and returns the id the
    /// tracker assigned to it.
    async fn create(&self, credential: &Credential, body: &str) -> Result<RecordId>;

    /// Reads the body of the record with the given id. A `credential` of
    /// `None` is an anonymous read.
    ///
    /// A failed fetch must not reveal whether the record is missing or
    /// merely not visible to the caller.
    async fn fetch(&self, credential: Option<&Credential>, id: RecordId) -> Result<String>;
}
