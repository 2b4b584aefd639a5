//! Internal error types.
//!
//! Uses `thiserror` for ergonomic error definition. These errors never
//! cross the public pipeline boundary; each grammar catches them and
//! records a warning for the affected unit of work instead.

use thiserror::Error;

/// Failure to decode a textual literal into a [`crate::Value`].
#[derive(Debug, Error)]
pub enum ValueError {
    /// A `{…}`/`[…]` literal was not valid JSON, even after the
    /// single-quote fallback pass.
    #[error("invalid JSON literal: {0}")]
    Json(#[from] serde_json::Error),
}
