//! Quote- and bracket-aware scanning.
//!
//! One reusable state machine shared by every downstream parser, so that
//! commas, parentheses and comment markers inside string literals or nested
//! values never break parsing. Three consumers rely on it:
//!
//! - splitting a call's argument list on top-level commas only
//! - detecting the end of a multi-line directive statement
//! - locating a trailing `//` line comment that is not inside a string
//!
//! Every operation is a single left-to-right pass, O(n), no backtracking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scanner;

pub use scanner::{
    ScanState, find_comment, find_comment_from, is_statement_end, split_top_level, strip_comment,
};
