use std::fmt;

use crate::runtime::Value;

/// One entry on the evaluation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Marker pushed for `(`
    Open,
    /// Raw token, classified only when bound as an argument
    Token(String),
    /// Reduced non-integer result of an inner form
    Value(Value),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Open => write!(f, "("),
            Slot::Token(t) => write!(f, "{}", t),
            Slot::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Pending tokens and results for one line
///
/// Grows on `(` and on atoms. A reduction collapses everything from the
/// innermost `Open` upwards into at most one result slot.
#[derive(Debug, Default)]
pub struct EvalStack {
    slots: Vec<Slot>,
}

impl EvalStack {
    /// Creates an empty stack
    pub fn new() -> Self {
        EvalStack { slots: Vec::new() }
    }

    /// Pushes an open-form marker
    pub fn push_open(&mut self) {
        self.slots.push(Slot::Open);
    }

    /// Pushes a raw token
    pub fn push_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        tracing::trace!(%token, depth = self.slots.len(), "push token");
        self.slots.push(Slot::Token(token));
    }

    /// Index of the nearest open marker, searching from the top
    pub fn innermost_open(&self) -> Option<usize> {
        self.slots.iter().rposition(|slot| *slot == Slot::Open)
    }

    /// Slots from `index` to the top
    pub fn slots_from(&self, index: usize) -> &[Slot] {
        self.slots.get(index..).unwrap_or(&[])
    }

    /// Removes every slot from `open` (the marker) upwards and pushes `result`
    ///
    /// Integers go back as their decimal text so an enclosing form binds them
    /// exactly like a literal token. Absent results push nothing.
    pub fn collapse(&mut self, open: usize, result: Option<&Value>) {
        self.slots.truncate(open);
        match result {
            None => {}
            Some(Value::Int(n)) => self.slots.push(Slot::Token(n.to_string())),
            Some(other) => self.slots.push(Slot::Value(other.clone())),
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if there are no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
