use paslex::diagnostics::{ErrorKind, ErrorOrigin, LexError};
use paslex::syntax::{DeclaredSet, PreGrammar, TokenType, check, lex};

fn check_src(input: &str) -> Result<DeclaredSet, LexError> {
    let tokens = lex(input).unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"));
    check(&tokens)
}

fn check_err(input: &str) -> LexError {
    match check_src(input) {
        Ok(declared) => panic!("expected {input:?} to fail, declared {declared:?}"),
        Err(err) => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_collects_declared_names() {
        let declared = check_src("var x, y: integer;\nz: bool;\nbegin\nx end").unwrap();
        let mut names: Vec<&str> = declared.iter().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn every_type_keyword_is_accepted() {
        let declared =
            check_src("var a: integer; b: longint; c: bool; d: real; begin a b c d end").unwrap();
        assert_eq!(declared.len(), 4);
    }

    #[test]
    fn declarations_are_case_insensitive() {
        let err = check_err("VAR Total: INTEGER; total: real; BEGIN END");
        assert_eq!(err.kind, ErrorKind::RedefinedIdentifier);
        assert_eq!(err.offset, 20);
    }

    #[test]
    fn body_identifiers_match_case_insensitively() {
        assert!(check_src("var Count: integer; begin COUNT := count + 1 end").is_ok());
    }

    #[test]
    fn redefinition_points_at_second_name() {
        let err = check_err("var x, x: integer; begin end");
        assert_eq!(err, LexError::new(7, ErrorKind::RedefinedIdentifier));
        assert_eq!(err.origin(), ErrorOrigin::Structural);
    }

    #[test]
    fn redefinition_across_groups() {
        let err = check_err("var x: integer; y, x: bool; begin end");
        assert_eq!(err, LexError::new(19, ErrorKind::RedefinedIdentifier));
    }

    #[test]
    fn undefined_identifier_in_body() {
        let err = check_err("var x: integer; begin y end");
        assert_eq!(err, LexError::new(22, ErrorKind::UndefinedIdentifier));
        assert_eq!(err.origin(), ErrorOrigin::Semantic);
    }

    #[test]
    fn missing_begin_points_at_final_semicolon() {
        let err = check_err("var x: integer;");
        assert_eq!(err, LexError::new(14, ErrorKind::MissingBegin));
    }

    #[test]
    fn missing_var() {
        assert_eq!(
            check_err("x: integer; begin end"),
            LexError::new(0, ErrorKind::MissingVar)
        );
        assert_eq!(
            check_err("  begin end"),
            LexError::new(2, ErrorKind::MissingVar)
        );
        assert_eq!(check_err(""), LexError::new(0, ErrorKind::MissingVar));
    }

    #[test]
    fn missing_identifier() {
        assert_eq!(
            check_err("var : integer; begin end"),
            LexError::new(4, ErrorKind::MissingIdentifier)
        );
        assert_eq!(
            check_err("var x, : integer; begin end"),
            LexError::new(7, ErrorKind::MissingIdentifier)
        );
    }

    #[test]
    fn keyword_where_name_expected_is_missing_identifier() {
        assert_eq!(
            check_err("var begin: integer; begin end"),
            LexError::new(4, ErrorKind::MissingIdentifier)
        );
    }

    #[test]
    fn empty_declaration_block_is_missing_identifier() {
        // At least one group must precede `begin`.
        assert_eq!(
            check_err("var begin end"),
            LexError::new(4, ErrorKind::MissingIdentifier)
        );
    }

    #[test]
    fn missing_comma_or_colon() {
        assert_eq!(
            check_err("var x y: integer; begin end"),
            LexError::new(6, ErrorKind::MissingCommaOrColon)
        );
    }

    #[test]
    fn missing_type() {
        assert_eq!(
            check_err("var x: y; begin end"),
            LexError::new(7, ErrorKind::MissingType)
        );
        assert_eq!(
            check_err("var x: 10; begin end"),
            LexError::new(7, ErrorKind::MissingType)
        );
    }

    #[test]
    fn missing_semicolon() {
        assert_eq!(
            check_err("var x: integer begin end"),
            LexError::new(15, ErrorKind::MissingSemicolon)
        );
    }

    #[test]
    fn token_after_group_that_is_not_a_name() {
        assert_eq!(
            check_err("var x: integer; 5 begin end"),
            LexError::new(16, ErrorKind::MissingIdentifier)
        );
    }

    #[test]
    fn end_of_input_reports_at_previous_token() {
        let cases = [
            ("var", 0, ErrorKind::MissingIdentifier),
            ("var x", 4, ErrorKind::MissingCommaOrColon),
            ("var x,", 5, ErrorKind::MissingIdentifier),
            ("var x:", 5, ErrorKind::MissingType),
            ("var x: real", 7, ErrorKind::MissingSemicolon),
            ("var x: real;", 11, ErrorKind::MissingBegin),
            ("var x: real; y: bool;", 20, ErrorKind::MissingBegin),
        ];
        for (input, offset, kind) in cases {
            assert_eq!(check_err(input), LexError::new(offset, kind), "{input}");
        }
    }

    #[test]
    fn body_is_not_structurally_checked() {
        assert!(check_src("var x: integer; begin ) x ( := := 0 end end end").is_ok());
        assert!(check_src("var x: integer; begin").is_ok());
    }

    #[test]
    fn body_keywords_are_not_identifiers() {
        assert!(
            check_src("var x: bool; begin if x then x := 1 else while x do x := 0 end").is_ok()
        );
    }

    #[test]
    fn declared_set_covers_every_body_identifier() {
        let input = "var a, b: integer; c: real;\nbegin a := b * c; if a > b then c := a end";
        let tokens = lex(input).unwrap();
        let declared = check(&tokens).unwrap();
        let begin_idx = tokens
            .iter()
            .position(|t| t.token_type == TokenType::Begin)
            .unwrap();
        for token in &tokens[begin_idx..] {
            if token.token_type == TokenType::Identifier {
                assert!(declared.contains(&token.literal));
            }
        }
    }

    #[test]
    fn begin_end_balance_is_tracked_but_not_enforced() {
        let tokens = lex("var x: integer; begin begin x end").unwrap();
        let mut pre_grammar = PreGrammar::new(&tokens);
        pre_grammar.parse_code().unwrap();
        assert_eq!(pre_grammar.begin_end_balance(), 1);
        assert_eq!(pre_grammar.declared().len(), 1);

        let tokens = lex("var x: integer; begin end end").unwrap();
        let mut pre_grammar = PreGrammar::new(&tokens);
        pre_grammar.parse_code().unwrap();
        assert_eq!(pre_grammar.begin_end_balance(), -1);
    }
}
