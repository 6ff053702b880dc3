use std::fmt;

/// Bearer credential for the tracker.
///
/// The token lives only as long as the session that supplied it; nothing in
/// this workspace persists it. `Debug` redacts the token so credentials
/// cannot leak through tracing output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_token() {
        let credential = Credential::new("ghp_sup3rsecret");
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("sup3rsecret"));
        assert_eq!(rendered, "Credential(\"<redacted>\")");
    }

    #[test]
    fn expose_returns_the_token() {
        assert_eq!(Credential::new("t0ken").expose(), "t0ken");
    }
}
