//! Tokenizer tests
//!
//! Token kinds, keyword casing, literal decoding and lexical errors.

use dotquery_engine::ErrorKind;
use dotquery_engine::query::{TokenKind, Tokenizer};
use serde_json::Number;

fn kinds(input: &str) -> Vec<TokenKind> {
    Tokenizer::tokenize(input)
        .expect("input should tokenize")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[cfg(test)]
mod token_kinds {
    use super::*;

    #[test]
    fn test_every_literal_kind() {
        assert_eq!(
            kinds(r#"equals a 'x' "y" 12 -1.5 true false /a\/b/ (ident)"#),
            vec![
                TokenKind::Ident("equals".into()),
                TokenKind::Ident("a".into()),
                TokenKind::String("x".into()),
                TokenKind::String("y".into()),
                TokenKind::Number(Number::from(12)),
                TokenKind::Number(Number::from_f64(-1.5).expect("finite")),
                TokenKind::Boolean(true),
                TokenKind::Boolean(false),
                TokenKind::Regex("a/b".into()),
                TokenKind::LeftParen,
                TokenKind::Ident("ident".into()),
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_lowercase_only() {
        assert_eq!(
            kinds("and or not any all"),
            vec![
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::Any,
                TokenKind::All,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("AND Or NOT True"),
            vec![
                TokenKind::Ident("AND".into()),
                TokenKind::Ident("Or".into()),
                TokenKind::Ident("NOT".into()),
                TokenKind::Ident("True".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_like_words_stay_identifiers() {
        assert_eq!(
            kinds("1.0.0 v1 -"),
            vec![
                TokenKind::Ident("1.0.0".into()),
                TokenKind::Ident("v1".into()),
                TokenKind::Ident("-".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_paths_are_single_words() {
        assert_eq!(
            kinds("exists $..book[-1:]"),
            vec![
                TokenKind::Ident("exists".into()),
                TokenKind::Ident("$..book[-1:]".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_newlines_only_separate() {
        assert_eq!(kinds("exists a\n\tor\r\nexists b"), kinds("exists a or exists b"));
    }

    #[test]
    fn test_token_text_and_offsets() {
        let tokens = Tokenizer::tokenize("not (exists 'a b')").expect("input should tokenize");
        let positions: Vec<(&str, usize)> = tokens
            .iter()
            .map(|token| (token.text.as_str(), token.offset))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("not", 0),
                ("(", 4),
                ("exists", 5),
                ("'a b'", 12),
                (")", 17),
                ("", 18),
            ]
        );
        assert_eq!(tokens[5].display_text(), "end of input");
    }
}

#[cfg(test)]
mod lexical_errors {
    use super::*;

    #[test]
    fn test_unterminated_string() {
        let error = Tokenizer::tokenize("equals a \"open").expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.offset(), Some(9));
    }

    #[test]
    fn test_unterminated_regex() {
        let error = Tokenizer::tokenize("matches a /abc").expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.offset(), Some(10));
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let error = Tokenizer::tokenize(r"equals a 'bad\u12'").expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.offset(), Some(13));
    }

    #[test]
    fn test_regex_escapes_in_quotes_pass_through() {
        let tokens = Tokenizer::tokenize(r"matches version '^\d+\.\d+'").expect("tokenize");
        assert_eq!(tokens[2].kind, TokenKind::String(r"^\d+\.\d+".to_string()));
        assert_eq!(tokens[2].offset, 16);
    }

    #[test]
    fn test_control_character() {
        let error = Tokenizer::tokenize("equals a\u{7} 1").expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.offset(), Some(8));
    }

    #[test]
    fn test_regex_must_end_a_word() {
        let error = Tokenizer::tokenize("matches a /x/y").expect_err("must fail");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.offset(), Some(13));
    }
}
