//! Structural tag validation.
//!
//! The model is expected to wrap specific content in XML-like tags
//! (`<gametxt>…</gametxt>` and friends). This crate scans raw response
//! text for a configured set of tags, counts open/close occurrences,
//! extracts the last occurrence's inner content, and flags duplicates.
//!
//! # Modules
//!
//! - [`config`] - Which tags are recognized and which are required
//! - [`validator`] - The scanning itself

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod validator;

pub use config::{TagConfig, TagSpec};
pub use validator::{TagCheckResult, check_all, missing_required};
