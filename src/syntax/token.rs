use std::fmt;

use super::token_type::TokenType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Lowercased for identifiers and keywords, verbatim otherwise.
    pub literal: String,
    /// Byte offset of the first character in the original source.
    pub start: usize,
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>, start: usize) -> Self {
        Self {
            token_type,
            literal: literal.into(),
            start,
        }
    }

    /// Token whose literal is the fixed spelling of its kind.
    pub fn symbol(token_type: TokenType, start: usize) -> Self {
        Self::new(token_type, token_type.spelling().unwrap_or_default(), start)
    }

    pub fn end(&self) -> usize {
        self.start + self.literal.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.token_type, self.literal)
    }
}
