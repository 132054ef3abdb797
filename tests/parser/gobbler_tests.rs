//! Integration tests for the primitive gobblers.
//!
//! Each gobbler consumes a maximal valid prefix and reports how much it
//! took; zero consumption means "no match", not an error.

use dialact_parser::gobble;

// =============================================================================
// No-match is soft failure
// =============================================================================

#[test]
fn gobblers_report_no_match_without_erroring() {
    assert_eq!(gobble::whitespace("x"), 0);
    assert!(gobble::identifier("=x").is_none());
    assert!(gobble::boolean("maybe").is_none());
    assert!(gobble::number("abc").unwrap().is_none());
    assert!(gobble::string("abc").unwrap().is_none());
    assert!(gobble::operator("abc").is_none());
}

#[test]
fn gobblers_handle_empty_input() {
    assert_eq!(gobble::whitespace(""), 0);
    assert!(gobble::identifier("").is_none());
    assert!(gobble::boolean("").is_none());
    assert!(gobble::number("").unwrap().is_none());
    assert!(gobble::string("").unwrap().is_none());
    assert!(gobble::operator("").is_none());
}

// =============================================================================
// Maximal-prefix consumption
// =============================================================================

#[test]
fn consumed_length_stops_at_class_boundary() {
    assert_eq!(gobble::identifier("show_browser 'x'"), Some((12, "show_browser")));
    assert_eq!(gobble::number("81 trailing").unwrap(), Some((2, 81.0)));
    assert_eq!(gobble::operator("=81"), Some((1, "=")));
    assert_eq!(gobble::whitespace(" \t let"), 3);
}

#[test]
fn string_consumed_length_covers_both_quotes() {
    // Opening quote + 8 body chars + closing quote.
    let (len, text) = gobble::string("'Zanzibar' tail").unwrap().unwrap();
    assert_eq!(len, 10);
    assert_eq!(text, "Zanzibar");

    // Escapes consume two input chars but decode to one.
    let (len, text) = gobble::string(r"'O\'Really?'").unwrap().unwrap();
    assert_eq!(len, 12);
    assert_eq!(text.len(), 9);
}

// =============================================================================
// Booleans delegate to identifiers
// =============================================================================

#[test]
fn boolean_requires_exact_literal() {
    assert_eq!(gobble::boolean("true"), Some((4, true)));
    assert_eq!(gobble::boolean("false"), Some((5, false)));
    // Identifier found, but not a boolean: soft no-match so the caller
    // can retry identifier gobbling on the same text.
    assert!(gobble::boolean("truthy").is_none());
    assert!(gobble::boolean("True").is_none());
    assert!(gobble::boolean("false_flag").is_none());
}

// =============================================================================
// Matched-but-invalid input is fatal
// =============================================================================

#[test]
fn number_conversion_failure_is_hard_error() {
    assert!(gobble::number("1.2.3").is_err());
    assert!(gobble::number("...").is_err());
}

#[test]
fn string_escape_failures_are_hard_errors() {
    assert!(gobble::string(r"'a\qb'").is_err());
    assert!(gobble::string("'no close").is_err());
}
