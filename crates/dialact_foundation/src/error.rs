//! Error types for the Dialact system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Kind;

/// Result alias using the Dialact [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Dialact operations.
///
/// Every parse error aborts the whole parse; there is no per-line
/// recovery. The kind always carries the offending substring.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error for a wrong-variant access.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a missing-command error for the given line content.
    #[must_use]
    pub fn missing_command(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCommand {
            context: context.into(),
        })
    }

    /// Creates an unknown-token error for the unmatched remainder.
    #[must_use]
    pub fn unknown_token(remainder: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownToken {
            remainder: remainder.into(),
        })
    }

    /// Creates an invalid-escape error.
    #[must_use]
    pub fn invalid_escape(escape: char, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidEscape {
            escape,
            context: context.into(),
        })
    }

    /// Creates an invalid-number error for a literal that failed conversion.
    #[must_use]
    pub fn invalid_number(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            literal: literal.into(),
        })
    }

    /// Creates an unterminated-string error.
    #[must_use]
    pub fn unterminated_string(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnterminatedString {
            context: context.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value's payload was requested under the wrong tag.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the accessor expected.
        expected: Kind,
        /// The kind the value actually has.
        actual: Kind,
    },

    /// A line's first non-whitespace content is not an identifier.
    #[error("cannot find command at [{context}]")]
    MissingCommand {
        /// The line that failed.
        context: String,
    },

    /// No gobbler could classify the remaining text on a line.
    #[error("unknown token at [{remainder}]")]
    UnknownToken {
        /// The unmatched remainder of the line.
        remainder: String,
    },

    /// A string literal contains an unsupported backslash escape.
    #[error("unknown escape \\{escape} at [{context}]")]
    InvalidEscape {
        /// The escaped character.
        escape: char,
        /// The string body around the escape.
        context: String,
    },

    /// A numeric-looking run of characters failed f64 conversion.
    #[error("invalid number literal '{literal}'")]
    InvalidNumber {
        /// The run of digit/dot characters that failed to parse.
        literal: String,
    },

    /// A string literal's closing quote was never found before line end.
    #[error("unterminated string at [{context}]")]
    UnterminatedString {
        /// The unterminated literal, from the opening quote.
        context: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File I/O failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Line number in the source text (1-based).
    pub line: Option<usize>,
    /// The full source line where the error occurred.
    pub source_line: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the source line text.
    #[must_use]
    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        if let Some(src) = &self.source_line {
            write!(f, ": {src}")?;
        }
        Ok(())
    }
}
