//! End-to-end integration tests.
//!
//! Drives the full pipeline: script text through the parser into a
//! session symbol table, plus binding persistence.

use std::collections::HashMap;

use dialact_foundation::{Kind, Value};
use dialact_runtime::{Session, serialize};

/// The demo script from the original dialog action program.
const DEMO_SCRIPT: &str = "let a = 81 \n\
                           let b = 'Zanzibar' \n\
                           show_browser 'http://www.google.com' \n\
                           let blah='O\\'Really?'\n \
                           let t =true";

#[test]
fn demo_script_builds_the_expected_symbol_table() {
    let mut session = Session::new();
    let actions = session.run_script(DEMO_SCRIPT).unwrap();

    assert_eq!(actions.len(), 5);

    // Four lets bind; show_browser passes through.
    assert_eq!(session.len(), 4);
    assert_eq!(session.get("a"), Some(&Value::Number(81.0)));
    assert_eq!(session.get("b"), Some(&Value::String("Zanzibar".to_string())));
    assert_eq!(
        session.get("blah"),
        Some(&Value::String("O'Really?".to_string()))
    );
    assert_eq!(session.get("t"), Some(&Value::Bool(true)));
    assert_eq!(session.get("show_browser"), None);
}

#[test]
fn rendered_actions_match_the_debug_format() {
    let mut session = Session::new();
    let actions = session.run_script(DEMO_SCRIPT).unwrap();

    let rendered: Vec<String> = actions.iter().map(ToString::to_string).collect();
    assert_eq!(rendered[0], "let <i a> <o => <n 81> ");
    assert_eq!(rendered[2], "show_browser <s http://www.google.com> ");
    assert_eq!(rendered[4], "let <i t> <o => <b true> ");
}

#[test]
fn bindings_survive_a_messagepack_round_trip() {
    let mut session = Session::new();
    session.run_script(DEMO_SCRIPT).unwrap();

    let bytes = serialize::to_bytes(&session.into_bindings()).unwrap();
    let restored = Session::with_bindings(serialize::from_bytes(&bytes).unwrap());

    assert_eq!(restored.len(), 4);
    assert_eq!(restored.get("a"), Some(&Value::Number(81.0)));
    assert_eq!(
        restored.get("blah"),
        Some(&Value::String("O'Really?".to_string()))
    );
}

#[test]
fn restored_bindings_keep_their_kinds() {
    let mut bindings = HashMap::new();
    bindings.insert("id".to_string(), Value::identifier("other"));
    bindings.insert("op".to_string(), Value::operator("=+"));

    let bytes = serialize::to_bytes(&bindings).unwrap();
    let restored = serialize::from_bytes(&bytes).unwrap();

    assert_eq!(restored["id"].kind(), Kind::Identifier);
    assert_eq!(restored["op"].kind(), Kind::Operator);
}

#[test]
fn session_consumer_does_not_leak_into_the_grammar() {
    // `let` with the wrong shape still parses fine; it just binds
    // nothing. The parser has no knowledge of the let rule.
    let mut session = Session::new();
    let actions = session.run_script("let x + 1\nlet 'y' = 2\nlet z").unwrap();
    assert_eq!(actions.len(), 3);
    assert!(session.is_empty());
}

#[test]
fn scripts_share_one_symbol_table_with_last_write_wins() {
    let mut session = Session::new();
    session.run_script("let a = 1").unwrap();
    session.run_script("let a = 'shadowed'").unwrap();
    session.run_script("let a =false").unwrap();
    assert_eq!(session.get("a"), Some(&Value::Bool(false)));
}
