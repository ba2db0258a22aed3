//! Typed search errors.
//!
//! "Not connected" is not represented here: it is the `Ok(None)` outcome of
//! a search, never an error.

use thiserror::Error;

/// `remove()` was called on a frontier with no nodes left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("remove from empty frontier")]
pub struct EmptyFrontierError;

/// Failures the search engine can produce.
///
/// The only variant is a frontier underflow inside the expansion loop. The
/// loop checks `is_empty` before every remove, so seeing this at runtime
/// means the engine itself is broken, not the caller's input.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search loop invariant violated: {0}")]
    EmptyFrontier(#[from] EmptyFrontierError),
}
