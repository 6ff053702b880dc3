//! The Create (shorten) operation.
//!
//! One record-creation call against the tracker, then purely local encoding
//! and link composition. No local persistence, no retry.

pub mod error;
pub mod service;

pub use error::{Result, ShortenError};
pub use service::{ShortLink, ShortenService};
