use crate::shortcode::ShortCode;

/// Base of the externally visible short links: origin plus base path.
///
/// Short links are composed as `<origin><base-path>/<code>`. The base path
/// is the path prefix the UI shell is served under (e.g. a project pages
/// subdirectory) and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBase {
    origin: String,
    base_path: String,
}

impl LinkBase {
    /// Creates a link base, normalizing slashes: the origin loses any
    /// trailing `/`, the base path gains a leading `/` and loses any
    /// trailing one.
    pub fn new(origin: impl Into<String>, base_path: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        let base_path = base_path.into();
        let base_path = base_path.trim_matches('/');
        let base_path = if base_path.is_empty() {
            String::new()
        } else {
            format!("/{}", base_path)
        };
        Self { origin, base_path }
    }

    /// Composes the full short link for a code.
    pub fn link(&self, code: &ShortCode) -> String {
        format!("{}{}/{}", self.origin, self.base_path, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base62;
    use crate::record::RecordId;

    fn code() -> ShortCode {
        base62::encode(RecordId::new(74))
    }

    #[test]
    fn composes_origin_base_path_and_code() {
        let base = LinkBase::new("https://example.github.io", "/short-url");
        assert_eq!(base.link(&code()), "https://example.github.io/short-url/00001c");
    }

    #[test]
    fn normalizes_stray_slashes() {
        let base = LinkBase::new("https://example.github.io/", "short-url/");
        assert_eq!(base.link(&code()), "https://example.github.io/short-url/00001c");
    }

    #[test]
    fn empty_base_path() {
        let base = LinkBase::new("https://s.example", "");
        assert_eq!(base.link(&code()), "https://s.example/00001c");
    }
}
