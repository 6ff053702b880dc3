//! In-memory implementation of [`IssueTracker`] for tests and offline use.

use crate::error::{FETCH_DENIED, Result};
use crate::{Credential, IssueTracker, TrackerError};
use async_trait::async_trait;
use dashmap::DashMap;
use issuelink_core::RecordId;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory tracker modeling a single repository.
///
/// Visibility is repository-level, like the real tracker: a public tracker
/// serves anonymous reads, a private one requires its configured token for
/// every operation. Ids are issued sequentially starting at 1 (the tracker's
/// own numbering); [`starting_at`][Self::starting_at] pins the next id so
/// tests can rely on externally issued numbers.
#[derive(Debug)]
pub struct InMemoryTracker {
    records: DashMap<u64, String>,
    next_id: AtomicU64,
    required_token: Option<String>,
}

impl InMemoryTracker {
    /// A public tracker: anyone can read, any credential can create.
    pub fn public() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
            required_token: None,
        }
    }

    /// A private tracker: every operation must carry `token`.
    pub fn private(token: impl Into<String>) -> Self {
        Self {
            required_token: Some(token.into()),
            ..Self::public()
        }
    }

    /// Sets the next id the tracker will issue.
    pub fn starting_at(self, next_id: u64) -> Self {
        self.next_id.store(next_id, Ordering::SeqCst);
        self
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn authorized(&self, credential: Option<&Credential>) -> bool {
        match &self.required_token {
            Some(required) => credential.is_some_and(|c| c.expose() == required),
            None => true,
        }
    }
}

#[async_trait]
impl IssueTracker for InMemoryTracker {
    async fn create(&self, credential: &Credential, body: &str) -> Result<RecordId> {
        if !self.authorized(Some(credential)) {
            return Err(TrackerError::Create("bad credentials".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records.insert(id, body.to_string());
        Ok(RecordId::new(id))
    }

    async fn fetch(&self, credential: Option<&Credential>, id: RecordId) -> Result<String> {
        // Denied and missing share one exit so the two stay observably
        // identical.
        if !self.authorized(credential) {
            return Err(TrackerError::Fetch(FETCH_DENIED.to_string()));
        }

        match self.records.get(&id.get()) {
            Some(body) => Ok(body.clone()),
            None => Err(TrackerError::Fetch(FETCH_DENIED.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cred(token: &str) -> Credential {
        Credential::new(token)
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let tracker = InMemoryTracker::public();

        let first = tracker.create(&cred("t"), "https://a.example").await.unwrap();
        let second = tracker.create(&cred("t"), "https://b.example").await.unwrap();

        assert_eq!(first, RecordId::new(1));
        assert_eq!(second, RecordId::new(2));
    }

    #[tokio::test]
    async fn starting_at_pins_the_next_id() {
        let tracker = InMemoryTracker::public().starting_at(74);

        let id = tracker.create(&cred("t"), "https://a.example").await.unwrap();
        assert_eq!(id, RecordId::new(74));
    }

    #[tokio::test]
    async fn public_tracker_serves_anonymous_reads() {
        let tracker = InMemoryTracker::public();
        let id = tracker.create(&cred("t"), "https://a.example").await.unwrap();

        let body = tracker.fetch(None, id).await.unwrap();
        assert_eq!(body, "https://a.example");
    }

    #[tokio::test]
    async fn private_tracker_rejects_anonymous_reads() {
        let tracker = InMemoryTracker::private("secret");
        let id = tracker.create(&cred("secret"), "https://a.example").await.unwrap();

        let err = tracker.fetch(None, id).await.unwrap_err();
        assert!(matches!(err, TrackerError::Fetch(_)));
    }

    #[tokio::test]
    async fn private_tracker_rejects_wrong_token() {
        let tracker = InMemoryTracker::private("secret");
        let id = tracker.create(&cred("secret"), "https://a.example").await.unwrap();

        let err = tracker.fetch(Some(&cred("guess")), id).await.unwrap_err();
        assert!(matches!(err, TrackerError::Fetch(_)));
    }

    #[tokio::test]
    async fn private_tracker_rejects_wrong_token_on_create() {
        let tracker = InMemoryTracker::private("secret");

        let err = tracker.create(&cred("guess"), "https://a.example").await.unwrap_err();
        assert!(matches!(err, TrackerError::Create(_)));
        assert!(tracker.is_empty());
    }

    #[tokio::test]
    async fn missing_record_is_indistinguishable_from_denied() {
        let tracker = InMemoryTracker::private("secret");
        let id = tracker.create(&cred("secret"), "https://a.example").await.unwrap();

        let missing = tracker
            .fetch(Some(&cred("secret")), RecordId::new(9999))
            .await
            .unwrap_err();
        let denied = tracker.fetch(Some(&cred("guess")), id).await.unwrap_err();

        assert_eq!(missing, denied);
    }
}
