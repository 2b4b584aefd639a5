//! Integration tests for ReviewIssue
//!
//! Builder methods, level/category combinations, and display formatting.

use storylint::{IssueCategory, IssueLevel, ReviewIssue};

#[test]
fn builders_set_level_and_category() {
    let error = ReviewIssue::error(IssueCategory::Tag, "required tag <gametxt> is missing");
    assert_eq!(error.level, IssueLevel::Error);
    assert_eq!(error.category, IssueCategory::Tag);
    assert_eq!(error.field, None);

    let warning = ReviewIssue::warning(IssueCategory::Variable, "unrecognized directive statement");
    assert_eq!(warning.level, IssueLevel::Warning);

    let info = ReviewIssue::info(IssueCategory::Format, "narrative content is short");
    assert_eq!(info.level, IssueLevel::Info);
}

#[test]
fn with_field_attaches_the_subject() {
    let issue =
        ReviewIssue::warning(IssueCategory::Tag, "tag <thinking> is not closed").with_field("thinking");
    assert_eq!(issue.field.as_deref(), Some("thinking"));
}

#[test]
fn display_includes_level_and_message() {
    let issue = ReviewIssue::error(IssueCategory::Tag, "required tag <gametxt> is missing");
    let rendered = format!("{issue}");
    assert!(rendered.contains("error"));
    assert!(rendered.contains("required tag <gametxt> is missing"));
}
