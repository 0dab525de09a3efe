//! Integer literal scanning
//!
//! Only decimal integers exist: `0` or a digit run without a leading zero.
//! A letter directly after the digits is rejected.

use super::Lexer;
use crate::diagnostics::error::{ErrorKind, LexError};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

impl Lexer<'_> {
    /// Entry: current byte is an ASCII digit. Errors point just past the digits.
    pub(super) fn read_integer(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        while self.current_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.read_char();
        }
        let digits: String = self.source[start..self.position]
            .iter()
            .map(|&b| char::from(b))
            .collect();

        if digits.len() > 1 && digits.starts_with('0') {
            return Err(self.error(ErrorKind::InvalidIntegerLiteral(digits)));
        }
        if self.current_byte().is_some_and(|b| b.is_ascii_alphabetic()) {
            return Err(self.error(ErrorKind::UnexpectedCharacter));
        }

        Ok(Token::new(TokenType::IntLiteral, digits, start))
    }
}
