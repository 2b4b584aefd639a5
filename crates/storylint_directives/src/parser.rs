//! Parser orchestration.

use tracing::debug;

use crate::command::ParseOutcome;
use crate::grammar::GRAMMARS;
use crate::statement::split_statements;

/// Parses a directive body into structured commands plus warnings.
///
/// Never fails and never panics: every malformed unit of work (one
/// statement, one decode attempt) is recorded as a warning and the rest
/// of the body still parses. Commands come back in source order.
#[must_use]
pub fn parse(content: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    if content.trim().is_empty() {
        outcome.warnings.push("directive body is empty".to_string());
        return outcome;
    }

    for stmt in split_statements(content) {
        let warnings_before = outcome.warnings.len();
        let mut matched = false;

        for (name, grammar) in GRAMMARS {
            if let Some(commands) = grammar(&stmt, &mut outcome.warnings) {
                debug!(grammar = name, count = commands.len(), "statement matched");
                outcome.commands.extend(commands);
                matched = true;
                break;
            }
        }

        // Exactly one warning per statement nothing could read; a grammar
        // that already diagnosed the statement counts.
        if !matched && outcome.warnings.len() == warnings_before {
            outcome
                .warnings
                .push(format!("unrecognized directive statement: {}", excerpt(&stmt.raw)));
        }
    }

    outcome
}

/// First line of a statement, capped for warning messages.
fn excerpt(raw: &str) -> String {
    const MAX: usize = 60;
    let first_line = raw.lines().next().unwrap_or_default();
    if first_line.chars().count() <= MAX {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(MAX).collect();
        format!("{cut}…")
    }
}
