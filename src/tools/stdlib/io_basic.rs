//! Output built-in: `print`

use std::io::Write;

use crate::error::Result;
use crate::runtime::{Argument, SymbolTable, Value};
use crate::tools;

/// Register output built-ins
pub fn register(symbols: &mut SymbolTable) {
    tools::register(symbols, "print", print);
}

/// `(print)` dumps every binding as `name: value`, one per line
///
/// `(print a b ...)` writes each argument on its own line: `name: value` for
/// variable references, the bare value otherwise. Never mutates the table and
/// never produces a value.
pub fn print(
    symbols: &mut SymbolTable,
    args: &[Argument],
    out: &mut dyn Write,
) -> Result<Option<Value>> {
    if args.is_empty() {
        for (name, value) in symbols.iter() {
            writeln!(out, "{}: {}", name, value)?;
        }
    } else {
        for arg in args {
            writeln!(out, "{}", arg)?;
        }
    }
    out.flush()?;

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(symbols: &mut SymbolTable, args: &[Argument]) -> String {
        let mut out = Vec::new();
        let result = print(symbols, args, &mut out).unwrap();
        assert_eq!(result, None);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_arguments() {
        let mut symbols = SymbolTable::new();
        let args = vec![
            Argument::named("x", Value::Int(5)),
            Argument::anonymous(Value::Int(7)),
            Argument::anonymous(Value::text("hi")),
        ];
        assert_eq!(run(&mut symbols, &args), "x: 5\n7\nhi\n");
    }

    #[test]
    fn test_print_dumps_table_in_order() {
        let mut symbols = SymbolTable::new();
        symbols.bind("b", Value::Int(2));
        symbols.bind("a", Value::Int(1));
        assert_eq!(run(&mut symbols, &[]), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_print_is_idempotent() {
        let mut symbols = SymbolTable::with_builtins();
        symbols.bind("x", Value::Int(9));
        let before = symbols.len();

        let first = run(&mut symbols, &[]);
        let second = run(&mut symbols, &[]);
        assert_eq!(first, second);
        assert_eq!(symbols.len(), before);
        assert!(first.contains("add: #<builtin add>\n"));
        assert!(first.contains("x: 9\n"));
    }
}
