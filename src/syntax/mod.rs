pub mod lexer;
pub mod pre_grammar;
pub mod token;
pub mod token_type;

pub use lexer::{Lexer, lex};
pub use pre_grammar::{DeclaredSet, PreGrammar, check};
pub use token::Token;
pub use token_type::TokenType;
