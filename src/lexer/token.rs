use std::fmt;

/// A single token from an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Column of the token's last character (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Token { kind, column }
    }
}

/// Token types
///
/// The scanner does not classify atoms. Operator names, variable names,
/// integers and free text all arrive as `Atom` and are told apart during
/// argument binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Any run of non-delimiter, non-space characters
    Atom(String),
}

impl TokenKind {
    /// Returns true for `Close`
    pub fn is_close(&self) -> bool {
        matches!(self, TokenKind::Close)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Open => write!(f, "("),
            TokenKind::Close => write!(f, ")"),
            TokenKind::Atom(text) => write!(f, "{}", text),
        }
    }
}
