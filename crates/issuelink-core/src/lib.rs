//! Core types for the issuelink URL shortener.
//!
//! This crate provides the base62 codec between record ids and short codes,
//! plus the short link composition helper. It is pure: no I/O, no external
//! state. The tracker client and the shorten/resolve services live in the
//! sibling crates.

pub mod base62;
pub mod error;
pub mod link;
pub mod record;
pub mod shortcode;

pub use error::CodecError;
pub use link::LinkBase;
pub use record::RecordId;
pub use shortcode::ShortCode;
