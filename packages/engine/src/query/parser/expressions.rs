//! Boolean structure: `or`, `and`, `not` and parenthesized groups

use super::core::{MAX_NESTING, Parser};
use crate::error::{QueryResult, parse_error};
use crate::query::ast::Node;
use crate::query::tokens::TokenKind;

impl Parser<'_> {
    /// Parse `or` chains (lowest precedence)
    pub(super) fn parse_or(&mut self) -> QueryResult<Node> {
        let mut left = self.parse_and()?;

        while self.eat(&TokenKind::Or) {
            let right = self.parse_and()?;
            left = left.or(right);
        }

        Ok(left)
    }

    /// Parse `and` chains
    pub(super) fn parse_and(&mut self) -> QueryResult<Node> {
        let mut left = self.parse_not()?;

        while self.eat(&TokenKind::And) {
            let right = self.parse_not()?;
            left = left.and(right);
        }

        Ok(left)
    }

    /// Parse prefix `not` (highest precedence)
    pub(super) fn parse_not(&mut self) -> QueryResult<Node> {
        if self.peek().kind == TokenKind::Not {
            let token = self.advance();
            self.enter(&token.text, token.offset)?;
            let clause = self.parse_not();
            self.depth -= 1;
            return Ok(clause?.negate());
        }
        self.parse_atom()
    }

    /// Parse a parenthesized expression or a single condition
    pub(super) fn parse_atom(&mut self) -> QueryResult<Node> {
        if self.peek().kind != TokenKind::LeftParen {
            return self.parse_condition();
        }

        let open = self.advance();
        self.enter(&open.text, open.offset)?;
        let inner = self.parse_or();
        self.depth -= 1;
        let inner = inner?;

        if self.peek().kind == TokenKind::RightParen {
            self.advance();
            Ok(inner)
        } else {
            let found = self.peek();
            Err(parse_error(
                format!(
                    "unbalanced parentheses: expected ')' to close '(' at {}, found '{}'",
                    open.offset,
                    found.display_text()
                ),
                found.display_text(),
                found.offset,
            ))
        }
    }

    fn enter(&mut self, token: &str, offset: usize) -> QueryResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(parse_error(
                format!("expression nested deeper than {MAX_NESTING} levels"),
                token,
                offset,
            ));
        }
        self.depth += 1;
        Ok(())
    }
}
