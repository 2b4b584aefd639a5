//! Review findings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a review finding.
///
/// Only `Error` blocks the overall pass verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueLevel {
    /// A required tag is missing or unclosed; blocks the pass verdict.
    Error,
    /// A recoverable inconsistency (optional tag problems, unparsable
    /// directive statements, empty directive bodies).
    Warning,
    /// Advisory notice, e.g. suspiciously short narrative content.
    Info,
}

/// Which part of the response a finding concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueCategory {
    /// Structural tag problems.
    Tag,
    /// Variable-mutation directive problems.
    Variable,
    /// Narrative formatting.
    Format,
    /// Anything else.
    Other,
}

/// A single finding produced by the review pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReviewIssue {
    /// Severity of the finding.
    pub level: IssueLevel,
    /// Which part of the response it concerns.
    pub category: IssueCategory,
    /// Human-readable description.
    pub message: String,
    /// The tag name or directive path the finding refers to, if any.
    pub field: Option<String>,
}

impl ReviewIssue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            category,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a warning-level issue.
    #[must_use]
    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            category,
            message: message.into(),
            field: None,
        }
    }

    /// Creates an info-level issue.
    #[must_use]
    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Info,
            category,
            message: message.into(),
            field: None,
        }
    }

    /// Attaches the tag name or directive path the finding refers to.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for ReviewIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
            IssueLevel::Info => "info",
        };
        write!(f, "{level}: {}", self.message)?;
        if let Some(field) = &self.field {
            write!(f, " ({field})")?;
        }
        Ok(())
    }
}
