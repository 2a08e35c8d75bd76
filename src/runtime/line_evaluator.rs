use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::lexer::{LineScanner, TokenKind};
use crate::runtime::{Argument, Builtin, EvalStack, Slot, SymbolTable, Value};

/// Line-at-a-time evaluator
///
/// Owns the symbol table that persists between lines and the sink `print`
/// writes to. Each call to [`LineEvaluator::parse`] scans one line, driving a
/// fresh [`EvalStack`] and reducing every form as its `)` is reached.
///
/// ```
/// use minilisp::{LineEvaluator, Value};
///
/// let mut evaluator = LineEvaluator::with_output(Vec::new());
/// assert_eq!(
///     evaluator.parse("(add (mul 2 3) (sub 5 1))").unwrap(),
///     Some(Value::Int(10))
/// );
/// ```
pub struct LineEvaluator<W: Write = io::Stdout> {
    /// Global symbol table
    pub symbols: SymbolTable,
    out: W,
}

impl LineEvaluator<io::Stdout> {
    /// Creates an evaluator that prints to stdout
    pub fn new() -> Self {
        LineEvaluator::with_output(io::stdout())
    }
}

impl Default for LineEvaluator<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LineEvaluator<W> {
    /// Creates an evaluator with the standard built-ins and a custom output sink
    pub fn with_output(out: W) -> Self {
        LineEvaluator {
            symbols: SymbolTable::with_builtins(),
            out,
        }
    }

    /// Creates an evaluator over an existing symbol table
    pub fn with_symbols(symbols: SymbolTable, out: W) -> Self {
        LineEvaluator { symbols, out }
    }

    /// Output sink
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the evaluator, returning its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Parses and evaluates one line
    pub fn parse(&mut self, line: &str) -> Result<Option<Value>> {
        parse_line(&mut self.symbols, &mut self.out, line)
    }
}

/// What the last scanned token left the line in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Nothing scanned yet
    Empty,
    /// Last token was `(` or an atom
    Pending,
    /// Last token was a reduced `)`
    Closed,
}

/// Parses and evaluates one line against `symbols`
///
/// Returns the result of the last reduced form. The line must end with `)`;
/// a blank line evaluates to `None`. The first error aborts the line.
pub fn parse_line(
    symbols: &mut SymbolTable,
    out: &mut dyn Write,
    line: &str,
) -> Result<Option<Value>> {
    let mut stack = EvalStack::new();
    let mut state = LineState::Empty;
    let mut result = None;

    for token in LineScanner::new(line.trim()) {
        state = if token.kind.is_close() {
            LineState::Closed
        } else {
            LineState::Pending
        };

        match token.kind {
            TokenKind::Open => stack.push_open(),
            TokenKind::Atom(text) => stack.push_token(text),
            TokenKind::Close => result = reduce(symbols, &mut stack, out)?,
        }
    }

    if state == LineState::Pending {
        return Err(Error::MissingClosingDelimiter);
    }

    Ok(result)
}

/// Reduces the innermost open form on `stack`
///
/// The form's slots, marker included, are replaced by its result.
pub fn reduce(
    symbols: &mut SymbolTable,
    stack: &mut EvalStack,
    out: &mut dyn Write,
) -> Result<Option<Value>> {
    let open = stack
        .innermost_open()
        .ok_or(Error::UnmatchedClosingDelimiter)?;

    let result = match stack.slots_from(open + 1).split_first() {
        // `()` is legal and yields nothing
        None => None,
        Some((operator, operands)) => {
            let builtin = resolve_operator(symbols, operator)?;
            let args = bind_arguments(symbols, operands);
            tracing::debug!(
                operator = builtin.name(),
                argc = args.len(),
                "reducing form"
            );
            builtin.call(symbols, &args, out)?
        }
    };

    stack.collapse(open, result.as_ref());
    Ok(result)
}

fn resolve_operator(symbols: &SymbolTable, operator: &Slot) -> Result<Builtin> {
    let name = match operator {
        Slot::Token(name) => name.as_str(),
        Slot::Value(Value::Text(name)) => name.as_str(),
        other => {
            return Err(Error::NotCallable {
                name: other.to_string(),
                type_name: match other {
                    Slot::Value(v) => v.type_name(),
                    _ => "marker".to_string(),
                },
            })
        }
    };

    match symbols.lookup(name) {
        None => Err(Error::UndefinedSymbol {
            name: name.to_string(),
        }),
        Some(Value::Builtin(builtin)) => Ok(*builtin),
        Some(value) => Err(Error::NotCallable {
            name: name.to_string(),
            type_name: value.type_name(),
        }),
    }
}

/// Turns operand slots into arguments
///
/// A raw token is a variable reference if bound, else an integer literal if it
/// parses, else text. Reduced results are always anonymous.
fn bind_arguments(symbols: &SymbolTable, operands: &[Slot]) -> Vec<Argument> {
    operands
        .iter()
        .map(|slot| match slot {
            Slot::Token(token) => match symbols.lookup(token) {
                Some(value) => Argument::named(token.clone(), value.clone()),
                None => Argument::anonymous(Value::from_literal(token)),
            },
            Slot::Value(value) => Argument::anonymous(value.clone()),
            // operands start after the innermost marker
            Slot::Open => unreachable!("open marker inside innermost form"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> LineEvaluator<Vec<u8>> {
        LineEvaluator::with_output(Vec::new())
    }

    fn printed(evaluator: LineEvaluator<Vec<u8>>) -> String {
        String::from_utf8(evaluator.into_output()).unwrap()
    }

    #[test]
    fn test_empty_form() {
        let mut ev = evaluator();
        assert_eq!(ev.parse("()").unwrap(), None);
    }

    #[test]
    fn test_blank_line() {
        let mut ev = evaluator();
        assert_eq!(ev.parse("   ").unwrap(), None);
    }

    #[test]
    fn test_arithmetic() {
        let mut ev = evaluator();
        assert_eq!(ev.parse("(add 1 2 3)").unwrap(), Some(Value::Int(6)));
        assert_eq!(ev.parse("(sub 10 3 2)").unwrap(), Some(Value::Int(5)));
        assert_eq!(ev.parse("(mul 2 3 4)").unwrap(), Some(Value::Int(24)));
        assert_eq!(ev.parse("(div 20 2 5)").unwrap(), Some(Value::Int(2)));
    }

    #[test]
    fn test_nested_innermost_first() {
        let mut ev = evaluator();
        assert_eq!(
            ev.parse("(add (mul 2 3) (sub 5 1))").unwrap(),
            Some(Value::Int(10))
        );
        assert_eq!(
            ev.parse("(sub (div 100 (add 5 5)) (mul 1 (add 1 1)))").unwrap(),
            Some(Value::Int(8))
        );
    }

    #[test]
    fn test_missing_close() {
        let mut ev = evaluator();
        assert_eq!(ev.parse("(add 1 2"), Err(Error::MissingClosingDelimiter));
        assert_eq!(ev.parse("("), Err(Error::MissingClosingDelimiter));
        assert_eq!(ev.parse("(add 1 2) 3"), Err(Error::MissingClosingDelimiter));
        assert_eq!(ev.parse("hello"), Err(Error::MissingClosingDelimiter));
    }

    #[test]
    fn test_unmatched_close() {
        let mut ev = evaluator();
        assert_eq!(ev.parse(")"), Err(Error::UnmatchedClosingDelimiter));
        assert_eq!(ev.parse("5)"), Err(Error::UnmatchedClosingDelimiter));
        assert_eq!(ev.parse("(add 1 2))"), Err(Error::UnmatchedClosingDelimiter));
    }

    #[test]
    fn test_last_reduction_wins() {
        let mut ev = evaluator();
        assert_eq!(ev.parse("(add 1 2)(add 3 4)").unwrap(), Some(Value::Int(7)));
    }

    #[test]
    fn test_open_does_not_split_token() {
        let mut ev = evaluator();
        // `1(mul` scans as an open marker followed by the atom `1mul`
        assert_eq!(
            ev.parse("(add 1(mul 2 3))"),
            Err(Error::UndefinedSymbol {
                name: "1mul".to_string()
            })
        );
    }

    #[test]
    fn test_undefined_operator() {
        let mut ev = evaluator();
        assert_eq!(
            ev.parse("(foo 1 2)"),
            Err(Error::UndefinedSymbol {
                name: "foo".to_string()
            })
        );
    }

    #[test]
    fn test_non_callable_operator() {
        let mut ev = evaluator();
        ev.parse("(set x 5)").unwrap();
        assert_eq!(
            ev.parse("(x 1)"),
            Err(Error::NotCallable {
                name: "x".to_string(),
                type_name: "int".to_string()
            })
        );
    }

    #[test]
    fn test_reduced_text_operator_is_looked_up() {
        let mut ev = evaluator();
        // The inner form returns the text `x`, which names an int
        assert!(matches!(
            ev.parse("((set x 5) 1)"),
            Err(Error::NotCallable { .. })
        ));
    }

    #[test]
    fn test_reduced_integer_operator_is_a_token() {
        let mut ev = evaluator();
        assert_eq!(
            ev.parse("((add 1 2))"),
            Err(Error::UndefinedSymbol {
                name: "3".to_string()
            })
        );
    }

    #[test]
    fn test_error_aborts_line() {
        let mut ev = evaluator();
        assert!(ev.parse("(set y (foo) 1)(set z 1)").is_err());
        assert!(!ev.symbols.contains("y"));
        assert!(!ev.symbols.contains("z"));
    }

    #[test]
    fn test_nested_result_is_anonymous() {
        let mut ev = evaluator();
        ev.parse("(set x 5)").unwrap();
        // `(set x 5)` reduces to the text `x`, which is passed as a literal
        assert!(matches!(
            ev.parse("(add (set x 5) 1)"),
            Err(Error::BadArgumentType { .. })
        ));
    }

    #[test]
    fn test_variables_in_arithmetic() {
        let mut ev = evaluator();
        ev.parse("(set x 5)").unwrap();
        ev.parse("(set y 7)").unwrap();
        assert_eq!(ev.parse("(mul x y)").unwrap(), Some(Value::Int(35)));
    }

    #[test]
    fn test_print_through_parse() {
        let mut ev = evaluator();
        ev.parse("(set x 5)").unwrap();
        assert_eq!(ev.parse("(print x 3 (add 1 1))").unwrap(), None);
        assert_eq!(printed(ev), "x: 5\n3\n2\n");
    }

    #[test]
    fn test_with_symbols_uses_given_table() {
        let mut symbols = SymbolTable::with_builtins();
        symbols.bind("base", Value::Int(40));
        let mut ev = LineEvaluator::with_symbols(symbols, Vec::new());

        assert_eq!(ev.parse("(add base 2)").unwrap(), Some(Value::Int(42)));
        assert!(ev.output().is_empty());
        ev.parse("(print base)").unwrap();
        assert_eq!(ev.output().as_slice(), b"base: 40\n");
    }

    #[test]
    fn test_with_symbols_without_builtins() {
        let mut ev = LineEvaluator::with_symbols(SymbolTable::new(), Vec::new());
        assert_eq!(
            ev.parse("(add 1 2)"),
            Err(Error::UndefinedSymbol {
                name: "add".to_string()
            })
        );
    }

    #[test]
    fn test_reduce_directly() {
        let mut symbols = SymbolTable::with_builtins();
        let mut stack = EvalStack::new();
        let mut out = Vec::new();
        stack.push_open();
        stack.push_token("add");
        stack.push_token("2");
        stack.push_token("2");

        let result = reduce(&mut symbols, &mut stack, &mut out).unwrap();
        assert_eq!(result, Some(Value::Int(4)));
        assert_eq!(stack.slots_from(0), &[Slot::Token("4".to_string())]);
    }

    #[test]
    fn test_reduce_empty_stack() {
        let mut symbols = SymbolTable::with_builtins();
        let mut stack = EvalStack::new();
        let mut out = Vec::new();
        assert_eq!(
            reduce(&mut symbols, &mut stack, &mut out),
            Err(Error::UnmatchedClosingDelimiter)
        );
    }
}
