//! Integration tests for token values.

use dialact_foundation::{ErrorKind, Kind, Value};

// =============================================================================
// Tags and accessors
// =============================================================================

#[test]
fn every_variant_reports_its_kind() {
    assert_eq!(Value::identifier("a").kind(), Kind::Identifier);
    assert_eq!(Value::String("s".to_string()).kind(), Kind::String);
    assert_eq!(Value::Bool(false).kind(), Kind::Bool);
    assert_eq!(Value::Number(0.5).kind(), Kind::Number);
    assert_eq!(Value::operator("+").kind(), Kind::Operator);
}

#[test]
fn soft_accessors_return_none_for_wrong_variant() {
    let id = Value::identifier("a");
    assert!(id.as_str().is_none());
    assert!(id.as_bool().is_none());
    assert!(id.as_number().is_none());
    assert!(id.as_operator().is_none());
    assert_eq!(id.as_identifier(), Some("a"));
}

#[test]
fn checked_accessor_names_both_kinds() {
    let err = Value::identifier("a").expect_number().unwrap_err();
    match err.kind {
        ErrorKind::TypeMismatch { expected, actual } => {
            assert_eq!(expected, Kind::Number);
            assert_eq!(actual, Kind::Identifier);
        }
        other => panic!("expected TypeMismatch, got {other}"),
    }
}

#[test]
fn checked_accessor_never_returns_wrong_data() {
    // Every checked accessor on a bool value except expect_bool fails.
    let b = Value::Bool(true);
    assert!(b.expect_identifier().is_err());
    assert!(b.expect_str().is_err());
    assert!(b.expect_number().is_err());
    assert!(b.expect_operator().is_err());
    assert!(b.expect_bool().is_ok());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn debug_rendering_uses_sigils() {
    assert_eq!(Value::identifier("blah").to_string(), "<i blah>");
    assert_eq!(
        Value::String("O'Really?".to_string()).to_string(),
        "<s O'Really?>"
    );
    assert_eq!(Value::Bool(false).to_string(), "<b false>");
    assert_eq!(Value::Number(81.0).to_string(), "<n 81>");
    assert_eq!(Value::Number(0.5).to_string(), "<n 0.5>");
    assert_eq!(Value::operator("=").to_string(), "<o =>");
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn same_payload_different_variant_are_unequal() {
    assert_ne!(Value::identifier("x"), Value::String("x".to_string()));
    assert_ne!(Value::identifier("="), Value::operator("="));
}

#[test]
fn number_equality_is_bitwise() {
    assert_eq!(Value::Number(81.0), Value::Number(81.0));
    assert_ne!(Value::Number(0.0), Value::Number(-0.0));
}
