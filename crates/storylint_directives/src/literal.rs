//! Shared textual-literal decoding.
//!
//! Every grammar funnels argument and right-hand-side text through
//! [`parse_value`], so the dialects agree on what `null`, `80`,
//! `'text'` and `{...}` mean.

use storylint_foundation::{Value, ValueError};

/// Decodes a raw textual literal into a [`Value`].
///
/// In order: `null`, `true`/`false`, a full numeric literal, a
/// single/double-quoted string (quotes stripped), a `{…}`/`[…]` JSON
/// literal (with one retry pass that swaps `'` for `"`), and finally the
/// raw text kept as a string. Never fails; undecodable text is a `Str`.
#[must_use]
pub fn parse_value(raw: &str) -> Value {
    let s = raw.trim();
    match s {
        "" => return Value::Str(String::new()),
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if is_numeric_literal(s) {
        if let Ok(n) = s.parse::<f64>() {
            return Value::Number(n);
        }
    }
    if let Some(inner) = quoted_inner(s) {
        return Value::Str(inner.to_string());
    }
    if is_json_shaped(s) {
        if let Ok(value) = decode_json(s) {
            return value;
        }
        // The model often emits JSON with single quotes; one swap pass.
        let swapped = s.replace('\'', "\"");
        if let Ok(value) = decode_json(&swapped) {
            return value;
        }
    }
    Value::Str(s.to_string())
}

/// Strips matching surrounding quotes for path-position arguments;
/// anything unquoted is taken verbatim.
#[must_use]
pub fn unquote(raw: &str) -> &str {
    let s = raw.trim();
    quoted_inner(s).unwrap_or(s)
}

/// Optional `-`, one or more digits, optional `.` plus one or more
/// digits. A literal scan of the full string, not a regex.
fn is_numeric_literal(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    let mut int_digits = 0;
    while chars.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        int_digits += 1;
    }
    if int_digits == 0 {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac_digits = 0;
        while chars.peek().is_some_and(char::is_ascii_digit) {
            chars.next();
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return false;
        }
    }
    chars.next().is_none()
}

fn quoted_inner(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if s.len() >= 2 {
        let first = bytes[0];
        let last = bytes[s.len() - 1];
        if first == last && (first == b'\'' || first == b'"') {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

fn is_json_shaped(s: &str) -> bool {
    (s.starts_with('{') && s.ends_with('}')) || (s.starts_with('[') && s.ends_with(']'))
}

fn decode_json(s: &str) -> Result<Value, ValueError> {
    let json = serde_json::from_str::<serde_json::Value>(s)?;
    Ok(Value::from_json(json))
}
