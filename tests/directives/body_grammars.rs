//! Integration tests for the whole-body dialects
//!
//! JSON-object and line-style bodies, which arrive at the grammar chain
//! as one statement covering the remainder of the input.

use storylint::{Operation, Value, parse};

// =============================================================================
// JSON-Object Bodies
// =============================================================================

#[test]
fn nested_object_becomes_dotted_sets() {
    let body = r#"{"MC": {"玩家": {"体力": 100, "金币": 50}}}"#;
    let outcome = parse(body);
    assert!(outcome.warnings.is_empty());
    let paths: Vec<&str> = outcome.commands.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, vec!["MC.玩家.体力", "MC.玩家.金币"]);
    assert!(
        outcome
            .commands
            .iter()
            .all(|c| c.operation == Operation::Set)
    );
}

#[test]
fn descriptor_objects_choose_the_operation() {
    let body = r#"{"MC": {"gold": {"operation": "add", "value": 50}, "hp": {"sub": 10}}}"#;
    let outcome = parse(body);
    assert_eq!(outcome.commands[0].operation, Operation::Add);
    assert_eq!(outcome.commands[0].value, Value::Number(50.0));
    assert_eq!(outcome.commands[1].operation, Operation::Subtract);
}

#[test]
fn multi_line_json_body_is_one_statement() {
    let body = "{\n  \"scene\": \"tavern\",\n  \"flags\": {\n    \"door_open\": true\n  }\n}";
    let outcome = parse(body);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands.len(), 2);
    assert_eq!(outcome.commands[1].path, "flags.door_open");
    assert_eq!(outcome.commands[1].value, Value::Bool(true));
}

#[test]
fn single_quoted_json_still_decodes() {
    let outcome = parse("{'hp': 80}");
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands[0].path, "hp");
}

#[test]
fn broken_json_is_one_warning_not_a_failure() {
    let outcome = parse("{\"hp\": 80,,}");
    assert!(outcome.commands.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("JSON"));
}

// =============================================================================
// Line-Style Bodies
// =============================================================================

#[test]
fn each_line_is_one_directive() {
    let body = "MC.hp = 100\nMC.gold += 5\nMC.fatigue -= 2\nMC.mood: calm";
    let outcome = parse(body);
    assert_eq!(outcome.commands.len(), 4);
    let ops: Vec<Operation> = outcome.commands.iter().map(|c| c.operation).collect();
    assert_eq!(
        ops,
        vec![
            Operation::Set,
            Operation::Add,
            Operation::Subtract,
            Operation::Set,
        ]
    );
}

#[test]
fn line_comments_stay_with_their_line() {
    let body = "MC.gold += 5 // pickpocketed\nMC.karma -= 1";
    let outcome = parse(body);
    assert_eq!(
        outcome.commands[0].comment.as_deref(),
        Some("pickpocketed")
    );
    assert_eq!(outcome.commands[1].comment, None);
}

#[test]
fn unquoted_values_stay_raw_strings() {
    let outcome = parse("MC.mood: quietly furious");
    assert_eq!(outcome.commands[0].value, Value::from("quietly furious"));
}

#[test]
fn later_directive_for_the_same_path_comes_later() {
    let body = "MC.hp = 50\nMC.hp = 80";
    let outcome = parse(body);
    assert_eq!(outcome.commands.len(), 2);
    assert_eq!(outcome.commands[1].value, Value::Number(80.0));
}
