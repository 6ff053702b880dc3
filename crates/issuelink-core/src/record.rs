use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an externally stored record (an issue number).
///
/// Record ids are issued by the tracker at creation time, are immutable
/// thereafter, and are never reused under normal operation. The transparent
/// serde representation lets the id map directly onto the tracker's numeric
/// wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a record id from a raw issue number.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw issue number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_serde() {
        let id: RecordId = serde_json::from_str("74").unwrap();
        assert_eq!(id, RecordId::new(74));
        assert_eq!(serde_json::to_string(&id).unwrap(), "74");
    }
}
