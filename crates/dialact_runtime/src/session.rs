//! Session state: the symbol table built from `let` actions.

use std::collections::HashMap;

use dialact_foundation::{Result, Value};
use dialact_parser::{Action, parse};

/// A session accumulates variable bindings across parsed scripts.
///
/// An action binds a variable when it is named `let` and has exactly
/// three arguments: an identifier, the `=` operator, and a value. Any
/// other action (including a malformed `let`) passes through untouched;
/// the session is a consumer of parsed actions, not part of the grammar.
#[derive(Debug, Default)]
pub struct Session {
    /// Variable bindings, last write wins.
    bindings: HashMap<String, Value>,
}

impl Session {
    /// Creates a new session with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with existing bindings.
    #[must_use]
    pub fn with_bindings(bindings: HashMap<String, Value>) -> Self {
        Self { bindings }
    }

    /// Parses a script, applies every `let` binding in source order, and
    /// returns all parsed actions.
    ///
    /// # Errors
    ///
    /// Returns a parse error without applying any bindings from the
    /// failed script (the parse aborts as a whole before any action is
    /// produced).
    pub fn run_script(&mut self, source: &str) -> Result<Vec<Action>> {
        let actions = parse(source)?;
        for action in &actions {
            self.apply(action);
        }
        Ok(actions)
    }

    /// Applies one action to the binding table.
    ///
    /// Returns the bound variable name when the action matched the `let`
    /// binding shape, `None` otherwise.
    pub fn apply(&mut self, action: &Action) -> Option<String> {
        let (name, value) = Self::as_binding(action)?;
        self.bindings.insert(name.to_string(), value.clone());
        Some(name.to_string())
    }

    /// Checks the `let <identifier> = <value>` shape and extracts the
    /// binding, if the action matches it.
    fn as_binding(action: &Action) -> Option<(&str, &Value)> {
        if action.name() != "let" || action.len() != 3 {
            return None;
        }
        let name = action.arg(0)?.as_identifier()?;
        if action.arg(1)?.as_operator()? != "=" {
            return None;
        }
        Some((name, action.arg(2)?))
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Sets a binding directly.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the session has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the binding table, consuming the session.
    #[must_use]
    pub fn into_bindings(self) -> HashMap<String, Value> {
        self.bindings
    }
}
