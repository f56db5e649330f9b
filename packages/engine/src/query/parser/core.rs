//! Core parser state and token cursor

use crate::error::{QueryResult, parse_error};
use crate::query::ast::Node;
use crate::query::registry::PredicateRegistry;
use crate::query::tokenizer::Tokenizer;
use crate::query::tokens::{Token, TokenKind};

/// Deepest nesting of parentheses and `not` accepted before giving up
pub(super) const MAX_NESTING: usize = 256;

/// Parser over a lexed token sequence
pub struct Parser<'r> {
    pub(super) tokens: Vec<Token>,
    pub(super) position: usize,
    pub(super) depth: usize,
    pub(super) registry: &'r PredicateRegistry,
}

impl<'r> Parser<'r> {
    /// Tokenize `input` and prepare a parser resolving operators in `registry`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Lex` if the input does not tokenize.
    pub fn with_registry(input: &str, registry: &'r PredicateRegistry) -> QueryResult<Self> {
        Ok(Self::from_tokens(Tokenizer::tokenize(input)?, registry))
    }

    /// Parser over tokens that were already lexed
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<Token>, registry: &'r PredicateRegistry) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.offset + t.text.chars().count());
            tokens.push(Token::new(TokenKind::Eof, "", end));
        }
        Self {
            tokens,
            position: 0,
            depth: 0,
            registry,
        }
    }

    /// Parse a complete expression; every token must be consumed
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Parse` for empty input, grammar violations and
    /// trailing tokens, `QueryError::UnknownOperator` for unregistered names.
    pub fn parse(mut self) -> QueryResult<Node> {
        if self.peek().kind == TokenKind::Eof {
            return Err(parse_error("empty query", "end of input", self.peek().offset));
        }

        let node = self.parse_or()?;

        let next = self.peek();
        match next.kind {
            TokenKind::Eof => Ok(node),
            TokenKind::RightParen => Err(parse_error(
                "unbalanced parentheses: unexpected ')'",
                next.display_text(),
                next.offset,
            )),
            _ => Err(parse_error(
                format!("unexpected token '{}' after expression", next.display_text()),
                next.display_text(),
                next.offset,
            )),
        }
    }

    /// Current token; the cursor never moves past `Eof`
    #[inline]
    pub(super) fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    /// Consume and return the current token
    #[inline]
    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind
    #[inline]
    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }
}
