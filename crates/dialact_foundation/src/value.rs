//! Tagged token values produced by the parser.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Kind;

/// One typed argument token from a parsed action.
///
/// Values are immutable once constructed. Each value is exactly one
/// variant; accessing the payload through the wrong accessor yields a
/// type-mismatch error rather than wrong data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Bare name: ASCII letters, digits, underscore.
    Identifier(String),
    /// Quoted string literal with escapes decoded.
    String(String),
    /// Boolean literal (`true` / `false`).
    Bool(bool),
    /// Numeric literal, always carried as f64.
    Number(f64),
    /// Maximal run of operator characters (`=+-*/`).
    Operator(String),
}

impl Value {
    /// Creates an identifier value.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates an operator value.
    #[must_use]
    pub fn operator(op: impl Into<String>) -> Self {
        Self::Operator(op.into())
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Identifier(_) => Kind::Identifier,
            Self::String(_) => Kind::String,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::Operator(_) => Kind::Operator,
        }
    }

    /// Attempts to extract an identifier name.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Attempts to extract a string literal's text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract an operator's text.
    #[must_use]
    pub fn as_operator(&self) -> Option<&str> {
        match self {
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Extracts an identifier name, or fails with a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch)
    /// if this value is not an identifier.
    pub fn expect_identifier(&self) -> Result<&str> {
        self.as_identifier()
            .ok_or_else(|| Error::type_mismatch(Kind::Identifier, self.kind()))
    }

    /// Extracts a string literal's text, or fails with a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this value is not a string.
    pub fn expect_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch(Kind::String, self.kind()))
    }

    /// Extracts a boolean, or fails with a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this value is not a bool.
    pub fn expect_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch(Kind::Bool, self.kind()))
    }

    /// Extracts a number, or fails with a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this value is not a number.
    pub fn expect_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| Error::type_mismatch(Kind::Number, self.kind()))
    }

    /// Extracts an operator's text, or fails with a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this value is not an operator.
    pub fn expect_operator(&self) -> Result<&str> {
        self.as_operator()
            .ok_or_else(|| Error::type_mismatch(Kind::Operator, self.kind()))
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identifier(a), Self::Identifier(b))
            | (Self::String(a), Self::String(b))
            | (Self::Operator(a), Self::Operator(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Identifier(s) | Self::String(s) | Self::Operator(s) => s.hash(state),
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => n.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the token in debug form: `<i name>`, `<s text>`, `<b true>`,
    /// `<n 81>`, `<o =>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sigil = self.kind().sigil();
        match self {
            Self::Identifier(s) | Self::String(s) | Self::Operator(s) => {
                write!(f, "<{sigil} {s}>")
            }
            Self::Bool(b) => write!(f, "<{sigil} {b}>"),
            Self::Number(n) => write!(f, "<{sigil} {n}>"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
