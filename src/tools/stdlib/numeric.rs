//! Integer arithmetic built-ins: `add`, `sub`, `mul`, `div`
//!
//! All four take two or more integer arguments and fold left to right.
//! Overflow wraps around like native 64-bit arithmetic.

use std::io::Write;

use crate::error::{Error, Result};
use crate::runtime::{Argument, SymbolTable, Value};
use crate::tools;

/// Register arithmetic built-ins
pub fn register(symbols: &mut SymbolTable) {
    tools::register(symbols, "add", add);
    tools::register(symbols, "sub", sub);
    tools::register(symbols, "mul", mul);
    tools::register(symbols, "div", div);
}

/// Folds `args` from `init` with `op`, checking each argument is an integer
fn fold(
    builtin: &str,
    args: &[Argument],
    init: i64,
    op: impl Fn(i64, i64) -> Result<i64>,
) -> Result<i64> {
    args.iter().try_fold(init, |acc, arg| {
        let n = tools::expect_int(builtin, arg)?;
        op(acc, n)
    })
}

/// Like [`fold`] but seeded with the first argument
fn fold_from_first(
    builtin: &str,
    args: &[Argument],
    op: impl Fn(i64, i64) -> Result<i64>,
) -> Result<i64> {
    tools::expect_min_arity(builtin, args, 2)?;
    let first = tools::expect_int(builtin, &args[0])?;
    fold(builtin, &args[1..], first, op)
}

/// `(add a b ...)` sum of all arguments
pub fn add(_: &mut SymbolTable, args: &[Argument], _: &mut dyn Write) -> Result<Option<Value>> {
    tools::expect_min_arity("add", args, 2)?;
    let sum = fold("add", args, 0, |acc, n| Ok(acc.wrapping_add(n)))?;
    Ok(Some(Value::Int(sum)))
}

/// `(mul a b ...)` product of all arguments
pub fn mul(_: &mut SymbolTable, args: &[Argument], _: &mut dyn Write) -> Result<Option<Value>> {
    tools::expect_min_arity("mul", args, 2)?;
    let product = fold("mul", args, 1, |acc, n| Ok(acc.wrapping_mul(n)))?;
    Ok(Some(Value::Int(product)))
}

/// `(sub a b ...)` subtracts each later argument from `a` in order
pub fn sub(_: &mut SymbolTable, args: &[Argument], _: &mut dyn Write) -> Result<Option<Value>> {
    let difference = fold_from_first("sub", args, |acc, n| Ok(acc.wrapping_sub(n)))?;
    Ok(Some(Value::Int(difference)))
}

/// `(div a b ...)` divides `a` by each later argument in order, truncating
pub fn div(_: &mut SymbolTable, args: &[Argument], _: &mut dyn Write) -> Result<Option<Value>> {
    let quotient = fold_from_first("div", args, |acc, n| {
        if n == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(acc.wrapping_div(n))
    })?;
    Ok(Some(Value::Int(quotient)))
}
