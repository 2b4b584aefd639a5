//! The directive grammar strategies.
//!
//! Each grammar exposes the same shape:
//! `try_parse(&Statement, &mut Vec<String>) -> Option<Vec<ParsedCommand>>`.
//! `None` means "not this dialect, try the next one"; `Some` means the
//! statement belongs to this dialect and has been consumed, even when a
//! malformed interior produced warnings instead of commands. The parser
//! walks the grammars in fixed priority order and stops at the first
//! `Some`.

pub mod call_legacy;
pub mod call_modern;
pub mod json_object;
pub mod line_style;

use crate::command::ParsedCommand;
use crate::statement::Statement;

/// Shared signature of every grammar strategy.
pub type GrammarFn = fn(&Statement, &mut Vec<String>) -> Option<Vec<ParsedCommand>>;

/// The grammar chain, highest priority first.
pub const GRAMMARS: &[(&str, GrammarFn)] = &[
    ("call-modern", call_modern::try_parse),
    ("call-legacy", call_legacy::try_parse),
    ("json-object", json_object::try_parse),
    ("line-style", line_style::try_parse),
];

/// Extracts `name` and the raw argument text from `name(args)` with an
/// optional trailing `;`. Returns `None` when the statement is not a
/// single call.
fn call_shape(code: &str) -> Option<(&str, &str)> {
    let code = code.trim().trim_end_matches(';').trim_end();
    let open = code.find('(')?;
    if !code.ends_with(')') || open + 1 > code.len() - 1 {
        return None;
    }
    let name = code[..open].trim();
    let args = &code[open + 1..code.len() - 1];
    Some((name, args))
}

/// Splits raw argument text on top-level commas, trimmed. Empty argument
/// lists come back as an empty vector rather than one empty piece.
fn split_args(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    storylint_scan::split_top_level(raw, ',')
        .into_iter()
        .map(str::trim)
        .collect()
}
