//! Binding built-in: `set`

use std::io::Write;

use crate::error::{Error, Result};
use crate::runtime::{Argument, SymbolTable, Value};
use crate::tools;

/// Literal that removes a binding when passed as `set`'s value
pub const NIL: &str = "nil";

/// Register binding built-ins
pub fn register(symbols: &mut SymbolTable) {
    tools::register(symbols, "set", set);
}

/// `(set name value)`
///
/// The target is the first argument's variable name if it was a reference,
/// otherwise its text. A variable-reference value is copied into the target;
/// an integer literal is bound directly; the literal `nil` removes the target.
/// Returns the target name as text, or nothing after a removal.
pub fn set(
    symbols: &mut SymbolTable,
    args: &[Argument],
    _out: &mut dyn Write,
) -> Result<Option<Value>> {
    tools::expect_arity("set", args, 2)?;

    let target = match (&args[0].name, &args[0].value) {
        (Some(name), _) => name.clone(),
        (None, Value::Text(text)) if !text.is_empty() => text.clone(),
        (None, _) => {
            return Err(Error::bad_argument(
                "set",
                "variable name",
                args[0].as_written(),
            ))
        }
    };

    let source = &args[1];
    if source.is_named() {
        symbols.bind(target.clone(), source.value.clone());
        return Ok(Some(Value::Text(target)));
    }

    match &source.value {
        Value::Int(n) => {
            symbols.bind(target.clone(), Value::Int(*n));
            Ok(Some(Value::Text(target)))
        }
        Value::Text(text) if text == NIL => {
            symbols.unbind(&target);
            Ok(None)
        }
        other => Err(Error::bad_argument(
            "set",
            "integer, variable or nil",
            other.to_string(),
        )),
    }
}
