//! Primitive gobblers.
//!
//! Each gobbler attempts to consume a maximal valid prefix of the
//! remaining line and reports how many bytes it took. `None` (or 0 for
//! [`whitespace`]) means the prefix did not match and the caller should
//! try the next alternative. A gobbler only returns an error when its
//! character class matched but the content is invalid, which is fatal to
//! the whole parse.
//!
//! All scanning is byte-based over ASCII character classes, so reported
//! lengths are always valid slice offsets.

use dialact_foundation::{Error, Result};

/// Characters recognized as operators.
const OPERATOR_CHARS: &[u8] = b"=+-*/";

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

/// Consumes a run of space and tab characters.
///
/// Returns the number of bytes consumed, 0 if the line does not start
/// with whitespace. Newlines are never seen here; the line splitter
/// already removed them.
#[must_use]
pub fn whitespace(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

/// Consumes a maximal run of ASCII letters, digits, and underscores.
///
/// Returns the consumed length and the captured text, or `None` if the
/// line does not start with an identifier character.
#[must_use]
pub fn identifier(s: &str) -> Option<(usize, &str)> {
    let len = s.bytes().take_while(|&b| is_identifier_byte(b)).count();
    if len == 0 {
        None
    } else {
        Some((len, &s[..len]))
    }
}

/// Consumes a `true` or `false` literal.
///
/// Delegates to [`identifier`]; any other identifier text reports no
/// match so the caller retries the remaining alternatives on the same
/// text. Tried before [`identifier`] in the dispatch order, so bare
/// `true`/`false` are always booleans.
#[must_use]
pub fn boolean(s: &str) -> Option<(usize, bool)> {
    let (len, text) = identifier(s)?;
    match text {
        "true" => Some((len, true)),
        "false" => Some((len, false)),
        _ => None,
    }
}

/// Consumes a maximal run of digits and `.` characters as an f64.
///
/// No leading sign, no exponent notation. An empty run is `None`; a
/// non-empty run that fails numeric conversion (e.g. `1.2.3`) is a
/// fatal error, because the character class matched.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidNumber`](dialact_foundation::ErrorKind::InvalidNumber)
/// if the run is not a valid decimal literal.
pub fn number(s: &str) -> Result<Option<(usize, f64)>> {
    let len = s.bytes().take_while(|&b| is_number_byte(b)).count();
    if len == 0 {
        return Ok(None);
    }
    let literal = &s[..len];
    let value: f64 = literal
        .parse()
        .map_err(|_| Error::invalid_number(literal))?;
    Ok(Some((len, value)))
}

/// Consumes a quoted string literal.
///
/// Triggers only when the first character is `'` or `"`. Scans to the
/// matching unescaped quote, decoding `\<quote>`, `\n`, and `\t`
/// escapes. The consumed length covers the opening quote, the body, and
/// the closing quote.
///
/// # Errors
///
/// Returns an invalid-escape error for any other escaped character, and
/// an unterminated-string error if the line ends before the closing
/// quote.
pub fn string(s: &str) -> Result<Option<(usize, String)>> {
    let mut chars = s.char_indices();
    let Some((_, quote)) = chars.next() else {
        return Ok(None);
    };
    if quote != '\'' && quote != '"' {
        return Ok(None);
    }

    let mut decoded = String::new();
    let mut in_escape = false;
    for (idx, ch) in chars {
        if in_escape {
            match ch {
                c if c == quote => decoded.push(c),
                'n' => decoded.push('\n'),
                't' => decoded.push('\t'),
                other => return Err(Error::invalid_escape(other, s)),
            }
            in_escape = false;
            continue;
        }
        match ch {
            '\\' => in_escape = true,
            c if c == quote => return Ok(Some((idx + 1, decoded))),
            c => decoded.push(c),
        }
    }

    Err(Error::unterminated_string(s))
}

/// Consumes a maximal run of operator characters (`=+-*/`).
///
/// A zero-length run is a valid "no operator" result, never an error.
#[must_use]
pub fn operator(s: &str) -> Option<(usize, &str)> {
    let len = s
        .bytes()
        .take_while(|&b| OPERATOR_CHARS.contains(&b))
        .count();
    if len == 0 {
        None
    } else {
        Some((len, &s[..len]))
    }
}
