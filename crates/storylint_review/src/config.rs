//! Reviewer configuration.
//!
//! Built once, then read-only; a single config may serve concurrent
//! reviews without synchronization.

use storylint_segment::MarkerTable;
use storylint_tags::TagConfig;

/// Default character count below which narrative content draws an
/// advisory notice.
pub const DEFAULT_SHORT_NARRATIVE_CHARS: usize = 20;

/// Everything a [`Reviewer`](crate::Reviewer) holds across calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Recognized tags and their required flags.
    pub tags: TagConfig,
    /// Active marker families for narrative segmentation.
    pub markers: MarkerTable,
    /// Narrative content shorter than this many characters gets an
    /// advisory `info` issue. `None` disables the check.
    pub short_narrative_hint: Option<usize>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            tags: TagConfig::default(),
            markers: MarkerTable::default(),
            short_narrative_hint: Some(DEFAULT_SHORT_NARRATIVE_CHARS),
        }
    }
}

impl ReviewConfig {
    /// Disables the short-narrative advisory.
    #[must_use]
    pub fn without_short_narrative_hint(mut self) -> Self {
        self.short_narrative_hint = None;
        self
    }
}
