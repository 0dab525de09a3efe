//! Identifier and keyword scanning

use super::{Lexer, helpers::is_ident_continue};
use crate::syntax::token::Token;
use crate::syntax::token_type::lookup_ident;

impl Lexer<'_> {
    /// Entry: current byte is an ASCII letter.
    pub(super) fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.current_byte().is_some_and(is_ident_continue) {
            self.read_char();
        }
        let word: String = self.source[start..self.position]
            .iter()
            .map(|&b| char::from(b.to_ascii_lowercase()))
            .collect();
        Token::new(lookup_ident(&word), word, start)
    }
}
