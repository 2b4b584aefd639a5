//! Integration tests for the review pipeline
//!
//! End-to-end runs over full model responses: tags, directives,
//! segmentation, issues, and the pass verdict.
