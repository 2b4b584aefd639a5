//! Call-style B: the legacy `NAME(path, value?)` dialect.
//!
//! Verbs: `SET`, `ADD`, `SUB`, `APPEND`, `REMOVE`, `CLEAR`, `TOGGLE`,
//! `INIT`. Matching is case-tolerant; the verb set itself is closed.

use storylint_foundation::Value;

use super::{call_shape, split_args};
use crate::command::{Operation, ParsedCommand};
use crate::literal::{parse_value, unquote};
use crate::statement::Statement;

/// Tries to read the statement as a legacy `NAME(…)` call.
pub fn try_parse(stmt: &Statement, warnings: &mut Vec<String>) -> Option<Vec<ParsedCommand>> {
    let (name, raw_args) = call_shape(&stmt.code)?;
    let operation = Operation::from_legacy(name)?;
    let args = split_args(raw_args);

    let Some(&path_arg) = args.first() else {
        warnings.push(format!("{name} needs a path: {}", stmt.raw));
        return Some(Vec::new());
    };
    let path = unquote(path_arg);
    if path.is_empty() {
        warnings.push(format!("directive has an empty path: {}", stmt.raw));
        return Some(Vec::new());
    }

    let value = args.get(1).map_or(Value::Null, |arg| parse_value(arg));
    Some(vec![ParsedCommand {
        path: path.to_string(),
        operation,
        value,
        comment: stmt.comment.clone(),
        raw_source: stmt.raw.clone(),
    }])
}
