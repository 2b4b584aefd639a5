//! Storylint - Review pipeline for LLM interactive-fiction output
//!
//! This crate re-exports all layers of the storylint system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: storylint_review     — Pipeline composition, issue list, verdict
//! Layer 2: storylint_tags       — Structural tag validation
//!          storylint_directives — Multi-grammar directive parsing
//!          storylint_segment    — Narrative content-block segmentation
//! Layer 1: storylint_scan       — Quote/bracket-aware scanning
//! Layer 0: storylint_foundation — Core types (Value, ReviewIssue)
//! ```

pub use storylint_directives as directives;
pub use storylint_foundation as foundation;
pub use storylint_scan as scan;
pub use storylint_tags as tags;

pub use storylint_directives::{Operation, ParseOutcome, ParsedCommand, parse, parse_value};
pub use storylint_foundation::{IssueCategory, IssueLevel, ReviewIssue, Value};
pub use storylint_review::{
    QuickCheck, ReviewConfig, ReviewResult, Reviewer, quick_check, review, review_rendered,
};
pub use storylint_segment::{BlockKind, ContentBlock, MarkerFamily, MarkerTable, segment};
pub use storylint_tags::{TagCheckResult, TagConfig, TagSpec};
