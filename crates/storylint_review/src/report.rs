//! Review output types.

use std::collections::BTreeMap;

use storylint_directives::ParsedCommand;
use storylint_foundation::{IssueLevel, ReviewIssue};
use storylint_segment::ContentBlock;
use storylint_tags::TagCheckResult;

/// Everything the pipeline learned about one model response.
///
/// Created fresh per call and discarded after the caller consumes it;
/// nothing inside refers back to the reviewer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReviewResult {
    /// Per-tag scan results, in configuration order.
    pub tags: Vec<TagCheckResult>,
    /// Directives extracted from the directive tag, in source order.
    pub commands: Vec<ParsedCommand>,
    /// Extracted inner content per tag name, for tags that had any.
    pub tag_contents: BTreeMap<String, String>,
    /// Every finding, in the order it was discovered.
    pub issues: Vec<ReviewIssue>,
    /// Narrative segmentation, present only when rendering metadata was
    /// requested.
    pub blocks: Option<Vec<ContentBlock>>,
    /// True iff no issue has level `error`.
    pub passed: bool,
}

impl ReviewResult {
    /// Issues at `error` level.
    #[must_use]
    pub fn errors(&self) -> Vec<&ReviewIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
            .collect()
    }

    /// Extracted content of one tag, by case-insensitive name.
    #[must_use]
    pub fn tag_content(&self, name: &str) -> Option<&str> {
        self.tag_contents
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, content)| content.as_str())
    }
}

/// Result of the narrow required-tags-only check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuickCheck {
    /// True iff every required tag is present and closed.
    pub passed: bool,
    /// Names of required tags that are absent or unclosed.
    pub missing_tags: Vec<String>,
}
