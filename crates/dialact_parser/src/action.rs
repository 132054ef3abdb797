//! Parsed command representation.

use std::fmt;

use dialact_foundation::Value;

/// One parsed command line: a name plus ordered typed arguments.
///
/// Actions are immutable once built; argument order is source order and
/// positions are significant (arguments are not named).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    name: String,
    args: Vec<Value>,
}

impl Action {
    /// Creates an action with the given name and arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered argument list.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Returns the argument at the given position, if any.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if the action has no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for Action {
    /// Debug rendering: the command name followed by each argument's
    /// `<tag value>` form, each element trailed by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.name)?;
        for arg in &self.args {
            write!(f, "{arg} ")?;
        }
        Ok(())
    }
}
