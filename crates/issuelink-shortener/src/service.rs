use crate::error::{Result, ShortenError};
use issuelink_core::{LinkBase, RecordId, ShortCode, base62};
use issuelink_tracker::{Credential, IssueTracker};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of a successful shorten: the record the tracker assigned, its
/// encoded code, and the externally visible short link.
#[derive(Debug, Clone, Serialize)]
pub struct ShortLink {
    pub record: RecordId,
    pub code: ShortCode,
    pub url: String,
}

/// The Create operation.
///
/// Persists a long URL as a new tracker record, encodes the assigned id and
/// composes the short link. Both inputs are preconditions: nothing is sent
/// until a credential and a well-formed http(s) URL are present. A tracker
/// failure surfaces as [`ShortenError::Create`] and is not retried.
#[derive(Debug, Clone)]
pub struct ShortenService<T> {
    tracker: Arc<T>,
    links: LinkBase,
}

impl<T: IssueTracker> ShortenService<T> {
    pub fn new(tracker: impl Into<Arc<T>>, links: LinkBase) -> Self {
        Self {
            tracker: tracker.into(),
            links,
        }
    }

    /// Shortens `url`, returning the composed short link.
    pub async fn shorten(&self, credential: Option<&Credential>, url: &str) -> Result<ShortLink> {
        let credential = credential.ok_or(ShortenError::MissingInput("credential"))?;
        let url = url.trim();
        if url.is_empty() {
            return Err(ShortenError::MissingInput("url"));
        }
        Self::validate_url(url)?;

        trace!("creating record");
        let record = self
            .tracker
            .create(credential, url)
            .await
            .map_err(|e| ShortenError::Create(e.to_string()))?;

        let code = base62::encode(record);
        let link = self.links.link(&code);
        debug!(record = %record, code = %code, "created short link");

        Ok(ShortLink {
            record,
            code,
            url: link,
        })
    }

    /// Validates that the URL has an http(s) scheme and a host.
    fn validate_url(url: &str) -> Result<()> {
        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ShortenError::InvalidUrl(format!(
                "URL must have a scheme and host: {}",
                url
            )));
        };

        if rest.is_empty() {
            return Err(ShortenError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        let scheme = scheme.to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use issuelink_tracker::InMemoryTracker;

    fn links() -> LinkBase {
        LinkBase::new("https://s.example", "/r")
    }

    fn cred() -> Credential {
        Credential::new("token")
    }

    #[tokio::test]
    async fn missing_credential_never_reaches_the_tracker() {
        let tracker = Arc::new(InMemoryTracker::public());
        let service = ShortenService::<InMemoryTracker>::new(Arc::clone(&tracker), links());

        let err = service
            .shorten(None, "https://example.com")
            .await
            .unwrap_err();

        assert_eq!(err, ShortenError::MissingInput("credential"));
        assert!(tracker.is_empty());
    }

    #[tokio::test]
    async fn blank_url_never_reaches_the_tracker() {
        let tracker = Arc::new(InMemoryTracker::public());
        let service = ShortenService::<InMemoryTracker>::new(Arc::clone(&tracker), links());

        let err = service.shorten(Some(&cred()), "   ").await.unwrap_err();

        assert_eq!(err, ShortenError::MissingInput("url"));
        assert!(tracker.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_http_schemes() {
        let service = ShortenService::new(InMemoryTracker::public(), links());

        let err = service
            .shorten(Some(&cred()), "ftp://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));

        let err = service
            .shorten(Some(&cred()), "not-a-url")
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn composes_the_short_link() {
        let service =
            ShortenService::new(InMemoryTracker::public().starting_at(74), links());

        let link = service
            .shorten(Some(&cred()), "https://example.com/a/b")
            .await
            .unwrap();

        assert_eq!(link.record, RecordId::new(74));
        assert_eq!(link.code.as_str(), "00001c");
        assert_eq!(link.url, "https://s.example/r/00001c");
    }

    #[tokio::test]
    async fn tracker_failure_surfaces_as_create() {
        let service = ShortenService::new(InMemoryTracker::private("secret"), links());

        let err = service
            .shorten(Some(&Credential::new("guess")), "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ShortenError::Create(_)));
    }
}
