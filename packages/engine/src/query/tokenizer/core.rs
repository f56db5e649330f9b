//! Core tokenizer type and dispatch loop

use crate::error::{QueryResult, lex_error};
use crate::query::tokens::{Token, TokenKind};

/// Tokenizer for condition DSL text
pub struct Tokenizer {
    pub(crate) input: String,
    pub(crate) tokens: Vec<Token>,
}

impl Tokenizer {
    /// Create new tokenizer
    #[inline]
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize `input` in one call
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Lex` on unterminated quotes or regex literals, invalid
    /// escapes and control characters.
    pub fn tokenize(input: &str) -> QueryResult<Vec<Token>> {
        Tokenizer::new(input).run()
    }

    /// Lex the whole input; the returned sequence always ends with [`TokenKind::Eof`]
    pub fn run(mut self) -> QueryResult<Vec<Token>> {
        use super::{patterns, strings, words};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                c if c.is_whitespace() => {
                    // Skip whitespace
                }
                '(' => self.push(TokenKind::LeftParen, "(", i),
                ')' => self.push(TokenKind::RightParen, ")", i),
                '\'' | '"' => {
                    i = strings::parse_string_literal(&mut self, &chars, i)?;
                }
                '/' => {
                    i = patterns::parse_regex_literal(&mut self, &chars, i)?;
                }
                c if c.is_control() => {
                    return Err(lex_error(
                        format!("unexpected character {c:?}"),
                        i,
                    ));
                }
                _ => {
                    i = words::parse_word(&mut self, &chars, i);
                }
            }
            i += 1;
        }

        self.push(TokenKind::Eof, "", chars.len());
        Ok(self.tokens)
    }

    #[inline]
    pub(crate) fn push(&mut self, kind: TokenKind, text: impl Into<String>, offset: usize) {
        self.tokens.push(Token::new(kind, text, offset));
    }
}

/// True for characters that end a bare word
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '(' | ')' | '\'' | '"')
}
