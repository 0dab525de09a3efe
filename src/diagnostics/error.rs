use thiserror::Error;

/// Stage that raised an error. Only used for logging; every stage reports
/// through the same [`LexError`] carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    Lexical,
    Structural,
    Semantic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Lexical
    #[error("invalid integer literal {0}")]
    InvalidIntegerLiteral(String),
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("Unexpected =, consider := or ==")]
    LoneEquals,

    // Declaration block
    #[error("missing Var")]
    MissingVar,
    #[error("missing Identifier")]
    MissingIdentifier,
    #[error("redefined Identifier")]
    RedefinedIdentifier,
    #[error("missing , or :")]
    MissingCommaOrColon,
    #[error("missing type")]
    MissingType,
    #[error("missing ;")]
    MissingSemicolon,
    #[error("missing Begin")]
    MissingBegin,

    // Program body
    #[error("undefined Identifier")]
    UndefinedIdentifier,
}

impl ErrorKind {
    pub fn origin(&self) -> ErrorOrigin {
        match self {
            ErrorKind::InvalidIntegerLiteral(_)
            | ErrorKind::UnexpectedCharacter
            | ErrorKind::LoneEquals => ErrorOrigin::Lexical,
            ErrorKind::UndefinedIdentifier => ErrorOrigin::Semantic,
            _ => ErrorOrigin::Structural,
        }
    }
}

/// A failure located at a byte offset of the original source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub offset: usize,
    pub kind: ErrorKind,
}

impl LexError {
    pub fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }

    pub fn origin(&self) -> ErrorOrigin {
        self.kind.origin()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_fixed_strings() {
        let cases = [
            (ErrorKind::InvalidIntegerLiteral("007".into()), "invalid integer literal 007"),
            (ErrorKind::UnexpectedCharacter, "unexpected character"),
            (ErrorKind::LoneEquals, "Unexpected =, consider := or =="),
            (ErrorKind::MissingVar, "missing Var"),
            (ErrorKind::MissingIdentifier, "missing Identifier"),
            (ErrorKind::RedefinedIdentifier, "redefined Identifier"),
            (ErrorKind::MissingCommaOrColon, "missing , or :"),
            (ErrorKind::MissingType, "missing type"),
            (ErrorKind::MissingSemicolon, "missing ;"),
            (ErrorKind::MissingBegin, "missing Begin"),
            (ErrorKind::UndefinedIdentifier, "undefined Identifier"),
        ];
        for (kind, expected) in cases {
            assert_eq!(LexError::new(0, kind).message(), expected);
        }
    }

    #[test]
    fn origin_classification() {
        assert_eq!(
            LexError::new(3, ErrorKind::LoneEquals).origin(),
            ErrorOrigin::Lexical
        );
        assert_eq!(ErrorKind::MissingBegin.origin(), ErrorOrigin::Structural);
        assert_eq!(ErrorKind::UndefinedIdentifier.origin(), ErrorOrigin::Semantic);
    }
}
