//! Line splitting and action assembly.
//!
//! The top-level [`parse`] operation is a pure function from script text
//! to an ordered sequence of actions. Each call is self-contained: no
//! global state, no shared buffers, safe to call concurrently on
//! disjoint inputs.

use dialact_foundation::{Error, ErrorContext, Result, Value};

use crate::action::Action;
use crate::gobble;

/// Parses a dialog action script into an ordered sequence of actions.
///
/// The input is split eagerly on `\n`, one action per line, in source
/// order. A trailing `\r` is stripped from each line so CRLF input
/// parses identically to LF input. Empty lines are not skipped; they
/// fail with a missing-command error like any other malformed line.
///
/// # Errors
///
/// The first grammar violation aborts the whole parse; there is no
/// per-line recovery. Errors carry the offending substring and the
/// 1-based line number in their context.
pub fn parse(input: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (index, raw) in input.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let action = parse_line(line).map_err(|e| {
            e.with_context(
                ErrorContext::new()
                    .with_line(index + 1)
                    .with_source_line(line),
            )
        })?;
        actions.push(action);
    }
    Ok(actions)
}

/// Parses a single line into an action.
///
/// The line starts with the command name (an identifier), followed by
/// argument tokens. Each argument is classified by trying the gobblers
/// in fixed priority order: bool, number, identifier, string, operator.
/// The first gobbler to consume wins, so `true` is always a bool and
/// `81` is always a number.
fn parse_line(line: &str) -> Result<Action> {
    let mut rest = &line[gobble::whitespace(line)..];

    let Some((consumed, name)) = gobble::identifier(rest) else {
        return Err(Error::missing_command(line));
    };
    let name = name.to_string();
    rest = &rest[consumed..];

    let mut args = Vec::new();
    while !rest.is_empty() {
        rest = &rest[gobble::whitespace(rest)..];
        if rest.is_empty() {
            break;
        }

        if let Some((consumed, value)) = gobble::boolean(rest) {
            args.push(Value::Bool(value));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((consumed, value)) = gobble::number(rest)? {
            args.push(Value::Number(value));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((consumed, text)) = gobble::identifier(rest) {
            args.push(Value::identifier(text));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((consumed, text)) = gobble::string(rest)? {
            args.push(Value::String(text));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((consumed, text)) = gobble::operator(rest) {
            args.push(Value::operator(text));
            rest = &rest[consumed..];
            continue;
        }

        return Err(Error::unknown_token(rest));
    }

    Ok(Action::new(name, args))
}
