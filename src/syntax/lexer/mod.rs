//! The lexer - turns source text into tokens
//!
//! Maximal-munch scanner over ASCII bytes. Offsets are byte offsets into the
//! original text. The input need not be valid UTF-8: any non-ASCII byte is an
//! unexpected character. The first invalid byte stops lexing with a [`LexError`].

mod helpers;
mod identifiers;
mod numbers;
mod operators;

use crate::diagnostics::error::{ErrorKind, LexError};
use crate::syntax::token::Token;

use helpers::{is_letter, is_whitespace};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self {
            source: source.as_ref(),
            position: 0,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the next token, or `None` once only whitespace remains.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(byte) = self.current_byte() else {
            return Ok(None);
        };

        let token = if is_letter(byte) {
            self.read_identifier()
        } else if byte.is_ascii_digit() {
            self.read_integer()?
        } else {
            self.read_operator(byte)?
        };
        Ok(Some(token))
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn current_byte(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.get(self.position + 1).copied()
    }

    fn read_char(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_byte().is_some_and(is_whitespace) {
            self.read_char();
        }
    }

    /// Error located at the cursor.
    fn error(&self, kind: ErrorKind) -> LexError {
        LexError::new(self.position, kind)
    }
}

/// Lex a whole source text, given as `&str` or raw bytes.
pub fn lex<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
