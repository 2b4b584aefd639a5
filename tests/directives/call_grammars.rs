//! Integration tests for the two call dialects
//!
//! Modern `_.method(...)` calls and legacy `NAME(...)` calls, including
//! multi-line arguments, comments, and mixed bodies.

use storylint::{Operation, Value, parse};

// =============================================================================
// Modern Calls
// =============================================================================

#[test]
fn set_keeps_the_last_argument() {
    let outcome = parse("_.set('MC.玩家.体力', 80, 100);");
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands.len(), 1);
    assert_eq!(outcome.commands[0].path, "MC.玩家.体力");
    assert_eq!(outcome.commands[0].operation, Operation::Set);
    assert_eq!(outcome.commands[0].value, Value::Number(100.0));
}

#[test]
fn assign_builds_a_dotted_path() {
    let outcome = parse("_.assign('MC.关系', '酒保', 10);");
    assert_eq!(outcome.commands[0].path, "MC.关系.酒保");
    assert_eq!(outcome.commands[0].operation, Operation::Set);
}

#[test]
fn add_without_a_delta_bumps_by_one() {
    let outcome = parse("_.add('world.day');");
    assert_eq!(outcome.commands[0].operation, Operation::Add);
    assert_eq!(outcome.commands[0].value, Value::Number(1.0));
}

#[test]
fn multi_line_json_argument_stays_one_call() {
    let body = "_.set('MC.inventory', {\n  \"sword\": 1,\n  \"potion\": 2\n});";
    let outcome = parse(body);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands.len(), 1);
    let map = outcome.commands[0].value.as_map().unwrap();
    assert_eq!(map[0], ("sword".to_string(), Value::Number(1.0)));
    assert_eq!(map[1], ("potion".to_string(), Value::Number(2.0)));
}

#[test]
fn trailing_comment_is_attached() {
    let outcome = parse("_.add('MC.gold', 5); // loot from the chest");
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands.len(), 1);
    assert_eq!(
        outcome.commands[0].comment.as_deref(),
        Some("loot from the chest")
    );
}

#[test]
fn bad_arity_warns_but_parsing_continues() {
    let body = "_.set('only_path');\n_.add('MC.gold', 5);";
    let outcome = parse(body);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.commands.len(), 1);
    assert_eq!(outcome.commands[0].path, "MC.gold");
}

// =============================================================================
// Legacy Calls
// =============================================================================

#[test]
fn legacy_names_map_onto_operations() {
    let body = "SET('a', 1);\nADD('b', 2);\nSUB('c', 3);\nAPPEND('d', 'x');\nCLEAR('e');";
    let outcome = parse(body);
    assert!(outcome.warnings.is_empty());
    let ops: Vec<Operation> = outcome.commands.iter().map(|c| c.operation).collect();
    assert_eq!(
        ops,
        vec![
            Operation::Set,
            Operation::Add,
            Operation::Subtract,
            Operation::Append,
            Operation::Remove,
        ]
    );
}

#[test]
fn init_behaves_like_set() {
    let outcome = parse("INIT('MC.玩家.金币', 50)");
    assert_eq!(outcome.commands[0].operation, Operation::Set);
    assert_eq!(outcome.commands[0].value, Value::Number(50.0));
}

#[test]
fn toggle_comes_back_as_unknown_with_its_payload() {
    let outcome = parse("TOGGLE('flags.lights')");
    assert_eq!(outcome.commands.len(), 1);
    assert_eq!(outcome.commands[0].operation, Operation::Unknown);
    assert_eq!(outcome.commands[0].path, "flags.lights");
}

#[test]
fn legacy_without_value_carries_null() {
    let outcome = parse("CLEAR('MC.curse')");
    assert_eq!(outcome.commands[0].value, Value::Null);
}

// =============================================================================
// Mixed Bodies
// =============================================================================

#[test]
fn dialects_may_mix_within_one_body() {
    let body = "_.set('a', 1);\nADD('b', 2);";
    let outcome = parse(body);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.commands.len(), 2);
}

#[test]
fn two_statements_on_one_line() {
    let outcome = parse("_.set('a', 1); _.add('b', 2);");
    assert_eq!(outcome.commands.len(), 2);
    assert_eq!(outcome.commands[0].path, "a");
    assert_eq!(outcome.commands[1].path, "b");
}

#[test]
fn raw_source_preserves_the_statement_text() {
    let outcome = parse("_.set('MC.hp', 10);");
    assert_eq!(outcome.commands[0].raw_source, "_.set('MC.hp', 10)");
}
