//! Formula character stream

use sentix_core::{Error, Result};

/// A cursor over the characters of a formula string.
///
/// Whitespace is transparent: it is skipped on every [`peek`](Lexer::peek)
/// and [`advance`](Lexer::advance). Consumption is one-directional; a
/// consumed character is never revisited.
pub(crate) struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub(crate) fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }

    /// Next character without consuming it
    pub(crate) fn peek(&mut self) -> Result<char> {
        self.skip_whitespace();
        self.chars.get(self.pos).copied().ok_or(Error::EndOfFormula)
    }

    /// Consume and return the next character
    pub(crate) fn advance(&mut self) -> Result<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Ok(ch)
    }

    /// True once only whitespace (or nothing) remains
    pub(crate) fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("AB");
        assert_eq!(lexer.peek().unwrap(), 'A');
        assert_eq!(lexer.peek().unwrap(), 'A');
        assert_eq!(lexer.advance().unwrap(), 'A');
        assert_eq!(lexer.advance().unwrap(), 'B');
    }

    #[test]
    fn test_whitespace_is_transparent() {
        let mut lexer = Lexer::new("  A \t B \n C");
        assert_eq!(lexer.advance().unwrap(), 'A');
        assert_eq!(lexer.peek().unwrap(), 'B');
        assert_eq!(lexer.advance().unwrap(), 'B');
        assert_eq!(lexer.advance().unwrap(), 'C');
        assert!(lexer.at_end());
    }

    #[test]
    fn test_exhausted_stream_errors() {
        let mut lexer = Lexer::new("   ");
        assert!(lexer.at_end());
        assert!(matches!(lexer.peek(), Err(Error::EndOfFormula)));
        assert!(matches!(lexer.advance(), Err(Error::EndOfFormula)));
    }
}
