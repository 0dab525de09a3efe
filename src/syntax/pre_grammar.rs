//! Pre-grammar check run before any full parse.
//!
//! Phase 1 walks the `var name {, name} : type ; ... begin` preamble and
//! collects the declared names. Phase 2 scans the rest of the tokens and
//! rejects any identifier that was not declared. There is one global
//! namespace and no other structural check on the body.

use std::collections::HashSet;

use crate::diagnostics::error::{ErrorKind, LexError};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

/// Names introduced by the declaration block, lowercased.
pub type DeclaredSet = HashSet<String>;

/// Position inside the declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclState {
    ExpectVar,
    ExpectName,
    ExpectCommaOrColon,
    ExpectType,
    ExpectSemicolon,
    /// After a complete group: `begin` ends the block, anything else starts a new group.
    DeclBoundary,
}

impl DeclState {
    /// What is reported when the tokens run out in this state.
    fn missing(self) -> ErrorKind {
        match self {
            DeclState::ExpectVar => ErrorKind::MissingVar,
            DeclState::ExpectName => ErrorKind::MissingIdentifier,
            DeclState::ExpectCommaOrColon => ErrorKind::MissingCommaOrColon,
            DeclState::ExpectType => ErrorKind::MissingType,
            DeclState::ExpectSemicolon => ErrorKind::MissingSemicolon,
            DeclState::DeclBoundary => ErrorKind::MissingBegin,
        }
    }
}

#[derive(Debug)]
pub struct PreGrammar<'t> {
    tokens: &'t [Token],
    pos: usize,
    declared: DeclaredSet,
    begin_end_balance: i64,
}

impl<'t> PreGrammar<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            declared: DeclaredSet::new(),
            begin_end_balance: 0,
        }
    }

    /// Run both phases. The first failure aborts the check.
    pub fn parse_code(&mut self) -> Result<(), LexError> {
        self.parse_var_block()?;
        self.parse_program_block()
    }

    pub fn declared(&self) -> &DeclaredSet {
        &self.declared
    }

    pub fn into_declared(self) -> DeclaredSet {
        self.declared
    }

    /// `begin` count minus `end` count, the preamble's `begin` included.
    /// Zero for a balanced program. Not enforced.
    pub fn begin_end_balance(&self) -> i64 {
        self.begin_end_balance
    }

    fn parse_var_block(&mut self) -> Result<(), LexError> {
        let mut state = DeclState::ExpectVar;

        loop {
            let Some(token) = self.tokens.get(self.pos) else {
                return Err(LexError::new(self.previous_start(), state.missing()));
            };

            state = match (state, token.token_type) {
                (DeclState::ExpectVar, TokenType::Var) => DeclState::ExpectName,
                (DeclState::ExpectName, TokenType::Identifier) => {
                    if !self.declared.insert(token.literal.clone()) {
                        return Err(LexError::new(token.start, ErrorKind::RedefinedIdentifier));
                    }
                    DeclState::ExpectCommaOrColon
                }
                (DeclState::ExpectCommaOrColon, TokenType::Comma) => DeclState::ExpectName,
                (DeclState::ExpectCommaOrColon, TokenType::Colon) => DeclState::ExpectType,
                (DeclState::ExpectType, ty) if ty.is_type_name() => DeclState::ExpectSemicolon,
                (DeclState::ExpectSemicolon, TokenType::SemiColon) => DeclState::DeclBoundary,
                (DeclState::DeclBoundary, TokenType::Begin) => {
                    self.pos += 1;
                    self.begin_end_balance = 1;
                    return Ok(());
                }
                (DeclState::DeclBoundary, _) => {
                    // Next group starts at this token.
                    state = DeclState::ExpectName;
                    continue;
                }
                (state, _) => return Err(LexError::new(token.start, state.missing())),
            };
            self.pos += 1;
        }
    }

    fn parse_program_block(&mut self) -> Result<(), LexError> {
        while let Some(token) = self.tokens.get(self.pos) {
            match token.token_type {
                TokenType::Identifier if !self.declared.contains(&token.literal) => {
                    return Err(LexError::new(token.start, ErrorKind::UndefinedIdentifier));
                }
                TokenType::Begin => self.begin_end_balance += 1,
                TokenType::End => self.begin_end_balance -= 1,
                _ => {}
            }
            self.pos += 1;
        }
        Ok(())
    }

    fn previous_start(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map_or(0, |token| token.start)
    }
}

/// Check `tokens` and return the declared names.
pub fn check(tokens: &[Token]) -> Result<DeclaredSet, LexError> {
    let mut pre_grammar = PreGrammar::new(tokens);
    pre_grammar.parse_code()?;
    Ok(pre_grammar.into_declared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::lex;

    fn check_src(src: &str) -> Result<DeclaredSet, LexError> {
        check(&lex(src).expect("source should lex"))
    }

    #[test]
    fn unexpected_token_reports_state_message() {
        let err = check_src("var x integer; begin end").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingCommaOrColon);
        assert_eq!(err.offset, 6);
    }

    #[test]
    fn boundary_without_begin_starts_new_group() {
        let declared = check_src("var a: integer; b, c: real; begin a b c end").unwrap();
        assert_eq!(declared.len(), 3);
        assert!(declared.contains("c"));
    }

    #[test]
    fn balance_counts_body_blocks() {
        let tokens = lex("var a: bool; begin begin a end end").unwrap();
        let mut pre_grammar = PreGrammar::new(&tokens);
        pre_grammar.parse_code().unwrap();
        assert_eq!(pre_grammar.begin_end_balance(), 0);

        let tokens = lex("var a: bool; begin a").unwrap();
        let mut pre_grammar = PreGrammar::new(&tokens);
        pre_grammar.parse_code().unwrap();
        assert_eq!(pre_grammar.begin_end_balance(), 1);
    }

    #[test]
    fn previous_start_is_zero_without_tokens() {
        let err = check(&[]).unwrap_err();
        assert_eq!(err, LexError::new(0, ErrorKind::MissingVar));
    }
}
