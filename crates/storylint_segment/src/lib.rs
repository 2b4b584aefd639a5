//! Marker-driven segmentation of narrative text.
//!
//! Interactive-fiction narration uses CJK-style bracket markers to set
//! off differently-rendered runs: `【【…】】` for system emphasis, `【…】`
//! for scenery, `「…」` for speech, `*…*` for interior thought. This
//! crate partitions a string into a gap-free, non-overlapping sequence
//! of typed [`ContentBlock`]s; everything outside a marker run becomes a
//! plain text block, so concatenating the blocks' raw content always
//! reproduces the input exactly.
//!
//! # Modules
//!
//! - [`block`] - Block kinds, spans, and the marker family table
//! - [`segmenter`] - Candidate scanning and overlap resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod block;
pub mod segmenter;

pub use block::{BlockKind, ContentBlock, MarkerFamily, MarkerTable};
pub use segmenter::{segment, segment_with};
