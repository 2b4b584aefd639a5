//! The JSON-object dialect.
//!
//! The whole statement is one JSON object describing a variable subtree.
//! Key paths are walked recursively; a leaf object that carries any of
//! the descriptor keys (`operation`, `value`, `set`, `add`, `subtract`,
//! `sub`) is one directive, any other leaf is an implicit set.

use serde_json::Value as Json;
use storylint_foundation::Value;

use crate::command::{Operation, ParsedCommand};
use crate::statement::Statement;

const DESCRIPTOR_KEYS: &[&str] = &["operation", "value", "set", "add", "subtract", "sub"];

/// Tries to read the statement as a single JSON object.
pub fn try_parse(stmt: &Statement, warnings: &mut Vec<String>) -> Option<Vec<ParsedCommand>> {
    let code = stmt.code.trim();
    if !code.starts_with('{') {
        return None;
    }

    // serde_json's recursion limit bounds nesting depth here, so
    // pathological nested input fails cleanly instead of recursing away.
    let decoded = serde_json::from_str::<Json>(code)
        .or_else(|_| serde_json::from_str::<Json>(&code.replace('\'', "\"")));
    let root = match decoded {
        Ok(Json::Object(map)) => map,
        Ok(_) => return None,
        Err(err) => {
            warnings.push(format!("directive block is not valid JSON: {err}"));
            return Some(Vec::new());
        }
    };

    // A descriptor at the root would have no path to address.
    if root.keys().any(|k| DESCRIPTOR_KEYS.contains(&k.as_str())) {
        warnings.push("directive descriptor at the top level has no path".to_string());
        return Some(Vec::new());
    }

    let mut commands = Vec::new();
    for (key, value) in root {
        walk(&key, value, stmt, &mut commands);
    }
    Some(commands)
}

/// Depth-first walk in document order; `path` accumulates dotted keys.
fn walk(path: &str, node: Json, stmt: &Statement, out: &mut Vec<ParsedCommand>) {
    match node {
        Json::Object(map) => {
            if map.keys().any(|k| DESCRIPTOR_KEYS.contains(&k.as_str())) {
                out.push(descriptor_command(path, &map, stmt));
            } else {
                for (key, value) in map {
                    walk(&format!("{path}.{key}"), value, stmt, out);
                }
            }
        }
        leaf => out.push(ParsedCommand {
            path: path.to_string(),
            operation: Operation::Set,
            value: Value::from_json(leaf),
            comment: stmt.comment.clone(),
            raw_source: stmt.raw.clone(),
        }),
    }
}

/// Builds the one directive a descriptor object denotes.
///
/// `{"operation": "add", "value": 5}` names the operation explicitly;
/// `{"add": 5}` uses the verb as the key; a bare `{"value": 5}` is an
/// implicit set.
fn descriptor_command(
    path: &str,
    map: &serde_json::Map<String, Json>,
    stmt: &Statement,
) -> ParsedCommand {
    let (operation, value) = if let Some(op_name) = map.get("operation").and_then(Json::as_str) {
        (
            Operation::from_descriptor(op_name),
            map.get("value").cloned().map_or(Value::Null, Value::from_json),
        )
    } else if let Some(v) = map.get("set") {
        (Operation::Set, Value::from_json(v.clone()))
    } else if let Some(v) = map.get("add") {
        (Operation::Add, Value::from_json(v.clone()))
    } else if let Some(v) = map.get("subtract").or_else(|| map.get("sub")) {
        (Operation::Subtract, Value::from_json(v.clone()))
    } else {
        (
            Operation::Set,
            map.get("value").cloned().map_or(Value::Null, Value::from_json),
        )
    };

    ParsedCommand {
        path: path.to_string(),
        operation,
        value,
        comment: stmt.comment.clone(),
        raw_source: stmt.raw.clone(),
    }
}
