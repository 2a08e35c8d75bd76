use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::runtime::{Argument, SymbolTable};

/// Signature shared by every built-in
///
/// Built-ins receive the symbol table, the bound arguments in order, and the
/// sink `print` writes to. `Ok(None)` means the form produced no value.
pub type BuiltinFn = fn(&mut SymbolTable, &[Argument], &mut dyn Write) -> Result<Option<Value>>;

/// Runtime value representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// Unclassified text (a literal that is neither a variable nor an integer)
    Text(String),
    /// Host-registered callable
    Builtin(Builtin),
}

impl Value {
    /// Creates a text value
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> String {
        match self {
            Value::Int(_) => "int".to_string(),
            Value::Text(_) => "text".to_string(),
            Value::Builtin(_) => "builtin".to_string(),
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Built-in payload, if any
    pub fn as_builtin(&self) -> Option<Builtin> {
        match self {
            Value::Builtin(b) => Some(*b),
            _ => None,
        }
    }

    /// Classifies a literal token: integer if it parses as `i64`, text otherwise
    pub fn from_literal(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(token.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Builtin(b) => write!(f, "{}", b),
        }
    }
}

/// A named function pointer stored in the symbol table
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    /// Wraps a function under its registered name
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    /// Registered name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the built-in
    pub fn call(
        &self,
        symbols: &mut SymbolTable,
        args: &[Argument],
        out: &mut dyn Write,
    ) -> Result<Option<Value>> {
        (self.func)(symbols, args, out)
    }
}

// Identity is the registered name; function pointer addresses are not stable
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#<builtin {}>", self.name)
    }
}
