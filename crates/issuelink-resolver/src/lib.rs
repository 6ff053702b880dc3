//! The Resolve (lookup) operation: a two-phase protocol that recovers the
//! original URL behind a short code, prompting for a credential only when
//! the anonymous read is not enough.

pub mod error;
pub mod flow;

pub use error::{ResolveError, Result};
pub use flow::{ResolveFlow, ResolveState};
