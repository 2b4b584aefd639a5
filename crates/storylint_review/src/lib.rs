//! Response review pipeline.
//!
//! Ties the other storylint crates together: validate structural tags,
//! parse the directive tag's body into commands, optionally segment the
//! narrative tag's body for rendering, and fold every finding into one
//! issue list with a pass/fail verdict. The pipeline never propagates a
//! failure to its caller; anything that goes wrong inside one unit of
//! work becomes an issue on the report.
//!
//! # Modules
//!
//! - [`config`] - Immutable per-reviewer configuration
//! - [`report`] - [`ReviewResult`] and [`QuickCheck`]
//! - [`reviewer`] - The pipeline itself

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod report;
pub mod reviewer;

pub use config::ReviewConfig;
pub use report::{QuickCheck, ReviewResult};
pub use reviewer::{Reviewer, quick_check, review, review_rendered};
