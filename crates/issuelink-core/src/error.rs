use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input contains a character outside the 62-symbol alphabet.
    /// Decoding fails on the first such character and never returns a
    /// partial result.
    #[error("invalid character in short code: {0:?}")]
    InvalidCharacter(char),
    /// The input encodes a number larger than the record id domain.
    #[error("short code exceeds the record id range")]
    Overflow,
}
