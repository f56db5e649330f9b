//! Condition parsing: quantifier, operator, path and operand

use super::core::Parser;
use crate::error::{QueryResult, parse_error, unknown_operator_error};
use crate::query::ast::{Node, Operand, Quantifier};
use crate::query::registry::Arity;
use crate::query::tokens::TokenKind;

impl Parser<'_> {
    /// Parse `['any' | 'all'] Operator Path [Operand]`
    pub(super) fn parse_condition(&mut self) -> QueryResult<Node> {
        let quantifier = match self.peek().kind {
            TokenKind::Any => {
                self.advance();
                Quantifier::Any
            }
            TokenKind::All => {
                self.advance();
                Quantifier::All
            }
            _ => Quantifier::Any,
        };

        let (op, arity, path) = if self.is_path_first() {
            let path = self.parse_path(None)?;
            let (op, arity) = self.parse_operator()?;
            (op, arity, path)
        } else {
            let (op, arity) = self.parse_operator()?;
            let path = self.parse_path(Some(&op))?;
            (op, arity, path)
        };

        let value = match arity {
            Arity::Zero => None,
            Arity::One => Some(self.parse_operand(&op)?),
        };

        tracing::debug!(
            target: "dotquery::parser",
            quantifier = quantifier.as_str(),
            op = %op,
            path = %path,
            "parsed condition"
        );

        Ok(Node::condition(quantifier, op, path, value))
    }

    /// `greater price 5` is the canonical order; `price greater 5` is accepted
    /// when the first word is not an operator and the second one is
    fn is_path_first(&self) -> bool {
        let first = self.peek();
        if !first.kind.can_be_path() {
            return false;
        }
        if let TokenKind::Ident(word) = &first.kind
            && self.registry.contains(word)
        {
            return false;
        }
        matches!(
            self.tokens.get(self.position + 1).map(|t| &t.kind),
            Some(TokenKind::Ident(word)) if self.registry.contains(word)
        )
    }

    /// Operator name and its registered arity
    fn parse_operator(&mut self) -> QueryResult<(String, Arity)> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(op) => {
                let arity = self
                    .registry
                    .get(&op)
                    .map(|predicate| predicate.arity())
                    .ok_or_else(|| unknown_operator_error(op.as_str(), Some(token.offset)))?;
                Ok((op, arity))
            }
            _ => Err(parse_error(
                format!("expected operator, found '{}'", token.display_text()),
                token.display_text(),
                token.offset,
            )),
        }
    }

    fn parse_path(&mut self, op: Option<&str>) -> QueryResult<String> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(path) | TokenKind::String(path) => Ok(path),
            TokenKind::Number(_) => Ok(token.text),
            _ => {
                let message = match op {
                    Some(op) => format!("operator '{op}' requires a path"),
                    None => format!("expected path, found '{}'", token.display_text()),
                };
                Err(parse_error(message, token.display_text(), token.offset))
            }
        }
    }

    fn parse_operand(&mut self, op: &str) -> QueryResult<Operand> {
        let token = self.peek();
        let operand = match &token.kind {
            TokenKind::String(s) | TokenKind::Ident(s) => Operand::String(s.clone()),
            TokenKind::Number(n) => Operand::Number(n.clone()),
            TokenKind::Boolean(b) => Operand::Bool(*b),
            TokenKind::Regex(pattern) => Operand::regex(pattern.clone()),
            _ => {
                return Err(parse_error(
                    format!("operator '{op}' requires an operand"),
                    token.display_text(),
                    token.offset,
                ));
            }
        };
        self.advance();
        Ok(operand)
    }
}
