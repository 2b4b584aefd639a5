//! Statement accumulation.
//!
//! Call-style directives may spread a single call across multiple lines
//! when they carry JSON-like arguments. Lines are folded into a growing
//! buffer; a statement is complete only when the bracket/quote scanner is
//! back at top level and the trimmed, comment-free buffer ends with `)`
//! or `);`.
//!
//! Whatever is left in the buffer at end of input is flushed as one final
//! statement. That is how JSON-object bodies and line-style bodies (which
//! never end in `)`) reach the grammar chain: as a single statement
//! holding the whole remainder.

use storylint_scan::{ScanState, find_comment_from, is_statement_end, split_top_level};

/// One complete directive statement, ready for the grammar chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    /// Statement text with trailing comments removed, trimmed.
    pub code: String,
    /// Trailing `//` comment, trimmed, if one was present.
    pub comment: Option<String>,
    /// The original span as it appeared in the directive body.
    pub raw: String,
}

/// Splits a directive body into complete statements.
#[must_use]
pub fn split_statements(content: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut code_buffer = String::new();
    let mut raw_buffer = String::new();
    let mut last_comment: Option<String> = None;
    let mut state = ScanState::new();

    for line in content.lines() {
        // Comments never count toward depth or completion; a quote inside
        // a comment must not drag the scanner into a phantom string.
        let (code, comment) = match find_comment_from(&state, line) {
            Some(at) => (&line[..at], Some(line[at + 2..].trim())),
            None => (line, None),
        };

        if code_buffer.is_empty() && code.trim().is_empty() {
            continue;
        }
        if !code_buffer.is_empty() {
            code_buffer.push('\n');
            raw_buffer.push('\n');
            state.advance('\n');
        }
        code_buffer.push_str(code);
        raw_buffer.push_str(line);
        state.advance_str(code);
        if let Some(text) = comment.filter(|text| !text.is_empty()) {
            last_comment = Some(text.to_string());
        }

        if is_statement_end(&state, &code_buffer) {
            flush_call_buffer(&code_buffer, last_comment.take(), &mut statements);
            code_buffer.clear();
            raw_buffer.clear();
            state = ScanState::new();
        }
    }

    // Remainder: JSON-object or line-style body, or trailing garbage.
    // Kept verbatim so the line grammar can do its own per-line comment
    // handling.
    if !code_buffer.trim().is_empty() {
        let raw = raw_buffer.trim().to_string();
        statements.push(Statement {
            code: raw.clone(),
            comment: None,
            raw,
        });
    }

    statements
}

/// Breaks a completed `)`-terminated buffer into statements: split on
/// top-level semicolons so two calls on one line become two statements,
/// with the trailing comment attached to the last one.
fn flush_call_buffer(code: &str, comment: Option<String>, statements: &mut Vec<Statement>) {
    let pieces: Vec<&str> = split_top_level(code, ';')
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();
    let last = pieces.len().saturating_sub(1);
    for (i, piece) in pieces.iter().enumerate() {
        statements.push(Statement {
            code: (*piece).to_string(),
            comment: if i == last { comment.clone() } else { None },
            raw: (*piece).to_string(),
        });
    }
}
