//! Operator and punctuation scanning
//!
//! Two-character operators win over their one-character prefixes. The
//! second byte is only looked at when it exists, so a trailing `:` is a
//! `Colon` and a trailing `=` is an error.

use super::Lexer;
use crate::diagnostics::error::{ErrorKind, LexError};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

fn two_char_operator(first: u8, second: Option<u8>) -> Option<TokenType> {
    match (first, second?) {
        (b':', b'=') => Some(TokenType::Assign),
        (b'<', b'=') => Some(TokenType::Le),
        (b'>', b'=') => Some(TokenType::Ge),
        (b'<', b'>') => Some(TokenType::Ne),
        (b'=', b'=') => Some(TokenType::Eq),
        _ => None,
    }
}

fn one_char_operator(byte: u8) -> Option<TokenType> {
    let token_type = match byte {
        b':' => TokenType::Colon,
        b',' => TokenType::Comma,
        b';' => TokenType::SemiColon,
        b'+' => TokenType::Add,
        b'-' => TokenType::Sub,
        b'*' => TokenType::Mul,
        b'/' => TokenType::Div,
        b'<' => TokenType::Lt,
        b'>' => TokenType::Gt,
        b'(' => TokenType::LParen,
        b')' => TokenType::RParen,
        _ => return None,
    };
    Some(token_type)
}

impl Lexer<'_> {
    /// Entry: current byte is neither a letter nor a digit.
    pub(super) fn read_operator(&mut self, first: u8) -> Result<Token, LexError> {
        let start = self.position;

        if let Some(token_type) = two_char_operator(first, self.peek_byte()) {
            self.read_char();
            self.read_char();
            return Ok(Token::symbol(token_type, start));
        }

        match one_char_operator(first) {
            Some(token_type) => {
                self.read_char();
                Ok(Token::symbol(token_type, start))
            }
            None if first == b'=' => Err(self.error(ErrorKind::LoneEquals)),
            None => Err(self.error(ErrorKind::UnexpectedCharacter)),
        }
    }
}
