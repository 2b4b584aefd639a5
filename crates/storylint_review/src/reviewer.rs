//! The review pipeline.
//!
//! One pass over the raw response: scan tags, parse the directive tag's
//! body, optionally segment the narrative tag's body, then fold every
//! finding into the issue list. `passed` is true iff no issue reached
//! `error` level. Nothing in here returns `Err` or panics on untrusted
//! input; each sub-parser already soft-fails into warnings.

use std::collections::BTreeMap;

use storylint_directives::parse;
use storylint_foundation::{IssueCategory, IssueLevel, ReviewIssue};
use storylint_segment::segment_with;
use storylint_tags::config::{DIRECTIVE_TAG, NARRATIVE_TAG};
use storylint_tags::validator::{check_all, missing_required};

use crate::config::ReviewConfig;
use crate::report::{QuickCheck, ReviewResult};

/// Reusable pipeline instance holding immutable configuration.
#[derive(Clone, Debug, Default)]
pub struct Reviewer {
    config: ReviewConfig,
}

impl Reviewer {
    /// Creates a reviewer with explicit configuration.
    #[must_use]
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Reviews one raw model response. Narrative segmentation is
    /// skipped; use [`Reviewer::review_rendered`] when a renderer needs
    /// block metadata.
    #[must_use]
    pub fn review(&self, raw_response: &str) -> ReviewResult {
        self.run(raw_response, false)
    }

    /// Reviews one raw model response and also segments the narrative
    /// tag's content into typed blocks.
    #[must_use]
    pub fn review_rendered(&self, raw_response: &str) -> ReviewResult {
        self.run(raw_response, true)
    }

    /// Checks required tags only. Cheaper than a full review; intended
    /// for gating before a retry prompt.
    #[must_use]
    pub fn quick_check(&self, text: &str) -> QuickCheck {
        let missing_tags = missing_required(text, &self.config.tags);
        QuickCheck {
            passed: missing_tags.is_empty(),
            missing_tags,
        }
    }

    fn run(&self, raw_response: &str, render: bool) -> ReviewResult {
        let tags = check_all(raw_response, &self.config.tags);
        let mut issues = Vec::new();
        let mut tag_contents = BTreeMap::new();

        for result in &tags {
            if let Some(content) = &result.content {
                tag_contents.insert(result.tag_name.clone(), content.clone());
            }
            let required = self
                .config
                .tags
                .get(&result.tag_name)
                .is_some_and(|spec| spec.required);
            if required && !(result.exists && result.is_closed) {
                let message = if result.exists {
                    format!("required tag <{}> is not closed", result.tag_name)
                } else {
                    format!("required tag <{}> is missing", result.tag_name)
                };
                issues.push(
                    ReviewIssue::error(IssueCategory::Tag, message).with_field(&result.tag_name),
                );
            } else if result.exists && !result.is_closed {
                issues.push(
                    ReviewIssue::warning(
                        IssueCategory::Tag,
                        format!("tag <{}> is not closed", result.tag_name),
                    )
                    .with_field(&result.tag_name),
                );
            }
            if let Some(warning) = &result.warning {
                issues.push(
                    ReviewIssue::warning(IssueCategory::Tag, warning).with_field(&result.tag_name),
                );
            }
        }

        let mut commands = Vec::new();
        if let Some(body) = lookup(&tag_contents, DIRECTIVE_TAG) {
            let outcome = parse(body);
            commands = outcome.commands;
            for warning in outcome.warnings {
                issues.push(
                    ReviewIssue::warning(IssueCategory::Variable, warning)
                        .with_field(DIRECTIVE_TAG),
                );
            }
        }

        let narrative = lookup(&tag_contents, NARRATIVE_TAG);
        if let (Some(text), Some(threshold)) = (narrative, self.config.short_narrative_hint) {
            if text.trim().chars().count() < threshold {
                issues.push(
                    ReviewIssue::info(
                        IssueCategory::Format,
                        format!("narrative content is shorter than {threshold} characters"),
                    )
                    .with_field(NARRATIVE_TAG),
                );
            }
        }

        let blocks = if render {
            Some(segment_with(
                narrative.unwrap_or_default(),
                &self.config.markers,
            ))
        } else {
            None
        };

        let passed = !issues.iter().any(|issue| issue.level == IssueLevel::Error);
        tracing::debug!(
            passed,
            commands = commands.len(),
            issues = issues.len(),
            "review complete"
        );

        ReviewResult {
            tags,
            commands,
            tag_contents,
            issues,
            blocks,
            passed,
        }
    }
}

fn lookup<'a>(contents: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    contents
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, content)| content.as_str())
}

/// Reviews a response with the default configuration.
#[must_use]
pub fn review(raw_response: &str) -> ReviewResult {
    Reviewer::default().review(raw_response)
}

/// Reviews a response with the default configuration, including
/// narrative segmentation.
#[must_use]
pub fn review_rendered(raw_response: &str) -> ReviewResult {
    Reviewer::default().review_rendered(raw_response)
}

/// Checks required tags with the default configuration.
#[must_use]
pub fn quick_check(text: &str) -> QuickCheck {
    Reviewer::default().quick_check(text)
}
