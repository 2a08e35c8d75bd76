//! Built-in operations
//!
//! Built-ins are plain functions stored in the symbol table as
//! [`Value::Builtin`](crate::runtime::Value::Builtin). The helpers here are
//! shared argument checks.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::{Argument, Builtin, BuiltinFn, SymbolTable, Value};

/// Binds a built-in under its own name
pub fn register(symbols: &mut SymbolTable, name: &'static str, func: BuiltinFn) {
    symbols.bind(name, Value::Builtin(Builtin::new(name, func)));
}

/// Fails unless exactly `count` arguments were given
pub fn expect_arity(builtin: &str, args: &[Argument], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(Error::wrong_arity(builtin, count.to_string(), args.len()));
    }
    Ok(())
}

/// Fails unless at least `min` arguments were given
pub fn expect_min_arity(builtin: &str, args: &[Argument], min: usize) -> Result<()> {
    if args.len() < min {
        return Err(Error::wrong_arity(
            builtin,
            format!("at least {}", min),
            args.len(),
        ));
    }
    Ok(())
}

/// Integer payload of an argument, or a type error naming the argument
pub fn expect_int(builtin: &str, arg: &Argument) -> Result<i64> {
    arg.value
        .as_int()
        .ok_or_else(|| Error::bad_argument(builtin, "int", arg.as_written()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_arity() {
        let args = vec![Argument::anonymous(Value::Int(1))];
        assert!(expect_arity("set", &args, 1).is_ok());
        assert_eq!(
            expect_arity("set", &args, 2),
            Err(Error::WrongArity {
                builtin: "set".to_string(),
                expected: "2".to_string(),
                got: 1
            })
        );
    }

    #[test]
    fn test_expect_min_arity() {
        let args = vec![Argument::anonymous(Value::Int(1))];
        let err = expect_min_arity("add", &args, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong arity for add: expected at least 2 arguments, got 1"
        );
    }

    #[test]
    fn test_expect_int() {
        let int = Argument::named("x", Value::Int(4));
        assert_eq!(expect_int("add", &int), Ok(4));

        let text = Argument::anonymous(Value::text("a"));
        assert_eq!(
            expect_int("add", &text),
            Err(Error::BadArgumentType {
                builtin: "add".to_string(),
                expected: "int".to_string(),
                got: "a".to_string()
            })
        );
    }
}
