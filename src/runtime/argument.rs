use std::fmt;

use crate::runtime::Value;

/// A value passed to a built-in
///
/// `name` is set only when the argument was a bare token that resolved against
/// the symbol table. `print` and `set` treat named and anonymous arguments
/// differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Source variable name for named arguments
    pub name: Option<String>,
    /// Resolved value (a copy of the binding for named arguments)
    pub value: Value,
}

impl Argument {
    /// Argument that came from a variable reference
    pub fn named(name: impl Into<String>, value: Value) -> Self {
        Argument {
            name: Some(name.into()),
            value,
        }
    }

    /// Argument that came from a literal or a nested form
    pub fn anonymous(value: Value) -> Self {
        Argument { name: None, value }
    }

    /// True when the argument referenced a variable
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// The argument as it appeared in the form: its variable name, or its value
    pub fn as_written(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.value.to_string(),
        }
    }
}

/// `name: value` for named arguments, bare `value` otherwise
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_display() {
        let arg = Argument::named("x", Value::Int(5));
        assert!(arg.is_named());
        assert_eq!(arg.to_string(), "x: 5");
        assert_eq!(arg.as_written(), "x");
    }

    #[test]
    fn test_anonymous_display() {
        let arg = Argument::anonymous(Value::text("hello"));
        assert!(!arg.is_named());
        assert_eq!(arg.to_string(), "hello");
        assert_eq!(arg.as_written(), "hello");
    }
}
