use std::collections::BTreeMap;

use crate::runtime::Value;
use crate::tools::stdlib;

/// Global name-to-value mapping
///
/// Data and built-ins share one namespace. There is no scoping: a single table
/// lives as long as its evaluator and is never reset. Entries are kept in name
/// order so that dumping the table is deterministic.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: BTreeMap<String, Value>,
}

impl SymbolTable {
    /// Creates an empty table with no built-ins
    pub fn new() -> Self {
        SymbolTable {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a table seeded with `print`, `set`, `add`, `sub`, `mul` and `div`
    pub fn with_builtins() -> Self {
        let mut table = SymbolTable::new();
        stdlib::register_all(&mut table);
        table
    }

    /// Gets the value bound to a name
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Binds a name, replacing any previous value (built-ins included)
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::debug!(%name, %value, "bind");
        self.entries.insert(name, value);
    }

    /// Removes a binding entirely
    pub fn unbind(&mut self, name: &str) -> Option<Value> {
        tracing::debug!(%name, "unbind");
        self.entries.remove(name)
    }

    /// Checks if a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over bindings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
