//! Runtime for minilisp: values, the symbol table, and the stack-driven line evaluator

mod argument;
mod environment;
mod line_evaluator;
mod stack;
mod value;

pub use argument::Argument;
pub use environment::SymbolTable;
pub use line_evaluator::{parse_line, reduce, LineEvaluator};
pub use stack::{EvalStack, Slot};
pub use value::{Builtin, BuiltinFn, Value};
