//! Call-style A: the modern `_.method(args)` dialect.
//!
//! Methods: `set`, `assign`, `add`, `remove`. Quirks preserved from the
//! dialect: `set` may carry an old value before the new one and always
//! takes the LAST argument as the value; `assign` addresses a parent and
//! a key separately; `add` defaults its delta to 1.

use storylint_foundation::Value;

use super::{call_shape, split_args};
use crate::command::{Operation, ParsedCommand};
use crate::literal::{parse_value, unquote};
use crate::statement::Statement;

/// Tries to read the statement as a modern `_.<method>(…)` call.
pub fn try_parse(stmt: &Statement, warnings: &mut Vec<String>) -> Option<Vec<ParsedCommand>> {
    let (name, raw_args) = call_shape(&stmt.code)?;
    let method = name.strip_prefix("_.")?.trim();
    if !matches!(method, "set" | "assign" | "add" | "remove") {
        return None;
    }
    let args = split_args(raw_args);

    let command = match method {
        "set" => {
            if args.len() < 2 {
                warnings.push(format!("_.set needs a path and a value: {}", stmt.raw));
                None
            } else {
                // Last argument wins; a middle argument is the old value.
                build(
                    stmt,
                    unquote(args[0]),
                    Operation::Set,
                    parse_value(args[args.len() - 1]),
                    warnings,
                )
            }
        }
        "assign" => {
            if args.len() < 3 {
                warnings.push(format!(
                    "_.assign needs a parent path, a key and a value: {}",
                    stmt.raw
                ));
                None
            } else {
                let path = format!("{}.{}", unquote(args[0]), unquote(args[1]));
                build(
                    stmt,
                    &path,
                    Operation::Set,
                    parse_value(args[args.len() - 1]),
                    warnings,
                )
            }
        }
        "add" => {
            if args.is_empty() {
                warnings.push(format!("_.add needs a path: {}", stmt.raw));
                None
            } else {
                let delta = args.get(1).map_or(Value::Number(1.0), |arg| parse_value(arg));
                build(stmt, unquote(args[0]), Operation::Add, delta, warnings)
            }
        }
        "remove" => {
            if args.is_empty() {
                warnings.push(format!("_.remove needs a path: {}", stmt.raw));
                None
            } else {
                let key = args.get(1).map_or(Value::Null, |arg| parse_value(arg));
                build(stmt, unquote(args[0]), Operation::Remove, key, warnings)
            }
        }
        _ => unreachable!("method is matched above"),
    };

    // The shape was ours even when the arguments were not; consume it.
    Some(command.into_iter().collect())
}

fn build(
    stmt: &Statement,
    path: &str,
    operation: Operation,
    value: Value,
    warnings: &mut Vec<String>,
) -> Option<ParsedCommand> {
    if path.is_empty() {
        warnings.push(format!("directive has an empty path: {}", stmt.raw));
        return None;
    }
    Some(ParsedCommand {
        path: path.to_string(),
        operation,
        value,
        comment: stmt.comment.clone(),
        raw_source: stmt.raw.clone(),
    })
}
