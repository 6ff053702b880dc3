use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short code over the 62-symbol alphabet `[0-9a-zA-Z]`.
///
/// Codes produced by the codec are at least 6 characters long (shorter
/// encodings are left-padded with the zero symbol `'0'`). A `ShortCode` is
/// only constructed by [`base62::encode`][crate::base62::encode], so holding
/// one means the underlying record id is recoverable from it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    pub(crate) fn from_encoded(code: SmolStr) -> Self {
        Self(code)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // TODO: reject strings outside the 62-symbol alphabet here instead
        // of at the next decode
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}
