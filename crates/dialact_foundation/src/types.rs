//! Tag descriptors for token values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tag of a [`Value`](crate::Value) variant.
///
/// Used in type-mismatch errors and in debug rendering. Every value is
/// exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Bare name: ASCII letters, digits, underscore.
    Identifier,
    /// Quoted string literal.
    String,
    /// `true` or `false`.
    Bool,
    /// 64-bit floating point number.
    Number,
    /// Run of characters from `=+-*/`.
    Operator,
}

impl Kind {
    /// Returns the one-letter tag used in debug rendering (`<i name>` etc).
    #[must_use]
    pub const fn sigil(self) -> char {
        match self {
            Self::Identifier => 'i',
            Self::String => 's',
            Self::Bool => 'b',
            Self::Number => 'n',
            Self::Operator => 'o',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Operator => "operator",
        };
        write!(f, "{name}")
    }
}
