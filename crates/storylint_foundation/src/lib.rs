//! Core types shared by every storylint crate.
//!
//! This crate provides:
//! - [`Value`] - The dynamically-typed payload a directive carries
//! - [`ReviewIssue`] - A single finding produced by the review pipeline
//! - [`ValueError`] - Internal literal-decode failure, caught at grammar
//!   boundaries and never surfaced to callers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod issue;
pub mod value;

pub use error::ValueError;
pub use issue::{IssueCategory, IssueLevel, ReviewIssue};
pub use value::Value;
