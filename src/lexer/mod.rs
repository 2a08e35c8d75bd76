//! Lexical analysis for minilisp
//!
//! Splits one input line into open delimiters, close delimiters and atoms.

mod line_scanner;
mod token;

pub use line_scanner::LineScanner;
pub use token::{Token, TokenKind};
