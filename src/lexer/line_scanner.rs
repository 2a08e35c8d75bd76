use super::token::{Token, TokenKind};

/// Single-pass scanner for one input line
///
/// Tokens are produced lazily so the caller can drive its evaluation stack
/// while the line is still being scanned. Only ASCII space separates atoms;
/// an open delimiter does not end a pending atom, so `ab(cd` yields `Open`
/// followed by the atom `abcd`.
pub struct LineScanner {
    /// Source line as character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
    /// Characters of the atom being accumulated
    buffer: String,
}

impl LineScanner {
    /// Creates a scanner over a single line
    pub fn new(line: &str) -> Self {
        LineScanner {
            source: line.chars().collect(),
            current: 0,
            buffer: String::new(),
        }
    }

    /// Scans every remaining token into a vector
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> char {
        self.source[self.current]
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn flush(&mut self) -> Option<Token> {
        if self.buffer.is_empty() {
            return None;
        }
        let atom = std::mem::take(&mut self.buffer);
        Some(Token::new(TokenKind::Atom(atom), self.current))
    }
}

impl Iterator for LineScanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.is_at_end() {
            match self.peek() {
                '(' => {
                    self.advance();
                    let token = Token::new(TokenKind::Open, self.current);
                    tracing::trace!(column = token.column, "scanned open delimiter");
                    return Some(token);
                }
                ')' => {
                    // Pending atom goes out first; the `)` is read on the next call
                    if let Some(atom) = self.flush() {
                        return Some(atom);
                    }
                    self.advance();
                    let token = Token::new(TokenKind::Close, self.current);
                    tracing::trace!(column = token.column, "scanned close delimiter");
                    return Some(token);
                }
                ' ' => {
                    let atom = self.flush();
                    self.advance();
                    if atom.is_some() {
                        return atom;
                    }
                }
                _ => {
                    let c = self.advance();
                    self.buffer.push(c);
                }
            }
        }

        self.flush()
    }
}
