use crate::error::{ResolveError, Result};
use issuelink_core::{CodecError, RecordId, base62};
use issuelink_tracker::{Credential, IssueTracker};
use std::sync::Arc;
use tracing::{debug, trace};

/// State of one resolve session.
///
/// ```text
/// Decoding ──────────────► Failed(code error)                 terminal
///     │
///     ▼
/// OptimisticFetch ───────► Resolved(url)                      terminal
///     │
///     ▼
/// AwaitingCredential ◄──► AuthenticatedFetch ──► Resolved(url)
/// ```
///
/// Every anonymous-fetch failure lands in `AwaitingCredential`, which can be
/// revisited indefinitely; a failed authenticated fetch returns there so the
/// operator can retry with a different credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveState {
    /// The code has not been decoded yet.
    Decoding,
    /// The anonymous read is in flight.
    OptimisticFetch,
    /// The anonymous read failed; a credential is needed to go further.
    AwaitingCredential,
    /// The credentialed read is in flight.
    AuthenticatedFetch,
    /// Terminal: the original URL, ready for the UI shell to redirect to.
    Resolved(String),
    /// Terminal: the code itself does not decode.
    Failed(CodecError),
}

impl ResolveState {
    /// Terminal states never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolveState::Resolved(_) | ResolveState::Failed(_))
    }
}

/// One resolve session: the tracker handle, the decoded record id and the
/// current [`ResolveState`], passed explicitly between steps. Nothing here
/// outlives the session.
#[derive(Debug, Clone)]
pub struct ResolveFlow<T> {
    tracker: Arc<T>,
    record: Option<RecordId>,
    state: ResolveState,
}

impl<T: IssueTracker> ResolveFlow<T> {
    pub fn new(tracker: impl Into<Arc<T>>) -> Self {
        Self {
            tracker: tracker.into(),
            record: None,
            state: ResolveState::Decoding,
        }
    }

    pub fn state(&self) -> &ResolveState {
        &self.state
    }

    /// The decoded record id, once the code has been decoded.
    pub fn record(&self) -> Option<RecordId> {
        self.record
    }

    /// Decodes `code` and attempts the anonymous read.
    ///
    /// Reaches `Resolved` on an anonymous-capable record without a credential
    /// ever being collected, `AwaitingCredential` on any anonymous failure
    /// (the reason is swallowed), or `Failed` if the code does not decode.
    /// Calling again after the flow has left `Decoding` changes nothing.
    pub async fn start(&mut self, code: &str) -> &ResolveState {
        if self.state != ResolveState::Decoding {
            return &self.state;
        }

        trace!(code, "decoding short code");
        let record = match base62::decode(code) {
            Ok(record) => record,
            Err(err) => {
                debug!(code, %err, "short code rejected");
                self.state = ResolveState::Failed(err);
                return &self.state;
            }
        };
        self.record = Some(record);

        self.state = ResolveState::OptimisticFetch;
        let fetched = self.tracker.fetch(None, record).await;
        match fetched {
            Ok(url) => {
                debug!(record = %record, "resolved anonymously");
                self.state = ResolveState::Resolved(url);
            }
            Err(err) => {
                // Not-found, unauthorized and rate-limited all land here
                // and produce the same state.
                trace!(record = %record, %err, "anonymous fetch failed");
                self.state = ResolveState::AwaitingCredential;
            }
        }
        &self.state
    }

    /// Retries the fetch with a credential.
    ///
    /// Only meaningful in `AwaitingCredential`; any other state is returned
    /// unchanged without touching the tracker. A failed authenticated fetch
    /// surfaces a retryable [`ResolveError::Fetch`] and leaves the flow in
    /// `AwaitingCredential` for the next attempt.
    pub async fn supply_credential(&mut self, credential: &Credential) -> Result<&ResolveState> {
        if self.state != ResolveState::AwaitingCredential {
            return Ok(&self.state);
        }
        let Some(record) = self.record else {
            // AwaitingCredential is only reachable after a decode.
            return Ok(&self.state);
        };

        self.state = ResolveState::AuthenticatedFetch;
        let fetched = self.tracker.fetch(Some(credential), record).await;
        match fetched {
            Ok(url) => {
                debug!(record = %record, "resolved with credential");
                self.state = ResolveState::Resolved(url);
                Ok(&self.state)
            }
            Err(err) => {
                self.state = ResolveState::AwaitingCredential;
                Err(ResolveError::Fetch(err.to_string()))
            }
        }
    }
}
