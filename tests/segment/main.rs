//! Integration tests for content-block segmentation
//!
//! Marker extraction, priority resolution, and the total-coverage
//! guarantee.

mod blocks;
