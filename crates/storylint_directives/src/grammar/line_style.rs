//! The line/assignment dialect.
//!
//! One directive per line: `path += value`, `path -= value`,
//! `path = value` or `path: value`, in that matching precedence, found by
//! literal scanning rather than a general regex engine. Lines that carry
//! no operator are passed over; the grammar claims the statement when at
//! least one line matched.

use storylint_scan::{ScanState, strip_comment};

use crate::command::{Operation, ParsedCommand};
use crate::literal::{parse_value, unquote};
use crate::statement::Statement;

const OPERATORS: &[(&str, Operation)] = &[
    ("+=", Operation::Add),
    ("-=", Operation::Subtract),
    ("=", Operation::Set),
    (":", Operation::Set),
];

/// Tries to read the statement as assignment lines.
pub fn try_parse(stmt: &Statement, _warnings: &mut Vec<String>) -> Option<Vec<ParsedCommand>> {
    let mut commands = Vec::new();
    for line in stmt.code.lines() {
        let (code, comment) = strip_comment(line);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        if let Some(command) = parse_line(code, comment) {
            commands.push(command);
        }
    }
    if commands.is_empty() {
        return None;
    }
    Some(commands)
}

fn parse_line(code: &str, comment: Option<&str>) -> Option<ParsedCommand> {
    for &(op_text, operation) in OPERATORS {
        if let Some(at) = find_outside_strings(code, op_text) {
            let path = unquote(code[..at].trim());
            if path.is_empty() || path.chars().any(char::is_whitespace) {
                continue;
            }
            let value = parse_value(&code[at + op_text.len()..]);
            return Some(ParsedCommand {
                path: path.to_string(),
                operation,
                value,
                comment: comment.map(String::from),
                raw_source: code.to_string(),
            });
        }
    }
    None
}

/// First occurrence of `needle` outside any quoted string.
fn find_outside_strings(s: &str, needle: &str) -> Option<usize> {
    let mut state = ScanState::new();
    for (idx, ch) in s.char_indices() {
        if state.in_string().is_none() && s[idx..].starts_with(needle) {
            return Some(idx);
        }
        state.advance(ch);
    }
    None
}
