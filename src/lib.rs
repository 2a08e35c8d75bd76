//! # minilisp - a tiny line-oriented Lisp
//!
//! An interactive evaluator for parenthesized prefix expressions with 64-bit
//! integer arithmetic and a single global symbol table.
//!
//! ## Quick Start
//!
//! ```rust
//! use minilisp::{LineEvaluator, Value};
//!
//! # fn main() -> minilisp::Result<()> {
//! let mut evaluator = LineEvaluator::with_output(Vec::new());
//!
//! evaluator.parse("(set x 5)")?;
//! let result = evaluator.parse("(mul x (add 1 2))")?;
//! assert_eq!(result, Some(Value::Int(15)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! Every line is one or more forms, and must end with `)`. Tokens are
//! separated by spaces. A token is a built-in name, a variable, an integer,
//! or free text.
//!
//! - `(add a b ...)`, `(sub a b ...)`, `(mul a b ...)`, `(div a b ...)` -
//!   integer folds over two or more arguments
//! - `(set name value)` - bind an integer, copy another variable, or remove
//!   the binding with `nil`
//! - `(print)` - dump every binding; `(print a b ...)` - show each argument
//!
//! Nested forms are evaluated innermost first:
//!
//! ```rust
//! # use minilisp::{LineEvaluator, Value};
//! let mut evaluator = LineEvaluator::with_output(Vec::new());
//! let result = evaluator.parse("(add (mul 2 3) (sub 5 1))").unwrap();
//! assert_eq!(result, Some(Value::Int(10)));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Line → LineScanner → tokens → EvalStack → reduce on ')' → Value
//! ```
//!
//! - [`LineScanner`] - splits a line into open, close and atom tokens
//! - [`LineEvaluator`] - drives the [`EvalStack`](runtime::EvalStack) and
//!   owns the [`SymbolTable`]
//! - [`Value`] - `Int`, `Text` or `Builtin`
//! - [`tools::stdlib`] - the six built-ins
//! - [`repl`] - the interactive host
//!
//! ## Error Handling
//!
//! ```rust
//! # use minilisp::{Error, LineEvaluator};
//! let mut evaluator = LineEvaluator::with_output(Vec::new());
//! match evaluator.parse("(add 1 2") {
//!     Err(e) => assert!(e.is_syntax()),
//!     Ok(_) => panic!("should have failed"),
//! }
//! assert_eq!(evaluator.parse("(div 1 0)"), Err(Error::DivisionByZero));
//! ```

/// Version of the minilisp interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod repl;
pub mod runtime;
pub mod tools;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{LineScanner, Token, TokenKind};
pub use repl::{Repl, ReplConfig, RunSummary};
pub use runtime::{Argument, Builtin, LineEvaluator, SymbolTable, Value};
