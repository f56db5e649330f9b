//! Rendering trees back into condition DSL text
//!
//! The rendered text parses to the same tree for every tree the parser produces
//! and for trees chained with `Node::and`, `Node::or` and `Node::negate`.
//! Explicit clause lists from `Node::all_of`/`Node::any_of` reparse to an
//! equivalent tree: a same-kind first clause is folded into its parent and a
//! single clause loses its wrapper. Paths and strings are quoted only when a
//! bare word would lex differently.

use std::fmt::{self, Display, Formatter, Write};

use super::ast::{Condition, Node, Operand, Quantifier};
use super::tokens::TokenKind;

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Condition(condition) => condition.fmt(f),
            Node::Not { clause } => {
                f.write_str("not ")?;
                write_grouped(f, clause, |n| matches!(n, Node::And { .. } | Node::Or { .. }))
            }
            Node::And { clauses } => write_clauses(f, clauses, " and ", |n| {
                matches!(n, Node::And { .. } | Node::Or { .. })
            }),
            Node::Or { clauses } => {
                write_clauses(f, clauses, " or ", |n| matches!(n, Node::Or { .. }))
            }
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.quantifier == Quantifier::All {
            f.write_str("all ")?;
        }
        write!(f, "{} ", self.op)?;
        write_path(f, &self.path)?;
        if let Some(value) = &self.value {
            f.write_char(' ')?;
            value.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::String(s) => write_quoted(f, s),
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Regex { regex } => {
                f.write_char('/')?;
                f.write_str(&regex.replace('/', "\\/"))?;
                f.write_char('/')
            }
        }
    }
}

fn write_clauses(
    f: &mut Formatter<'_>,
    clauses: &[Node],
    separator: &str,
    needs_group: impl Fn(&Node) -> bool,
) -> fmt::Result {
    if clauses.len() < 2 {
        // Degenerate combinators keep their own parentheses
        f.write_char('(')?;
        for clause in clauses {
            clause.fmt(f)?;
        }
        return f.write_char(')');
    }
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write_grouped(f, clause, &needs_group)?;
    }
    Ok(())
}

fn write_grouped(
    f: &mut Formatter<'_>,
    node: &Node,
    needs_group: impl Fn(&Node) -> bool,
) -> fmt::Result {
    if needs_group(node) {
        write!(f, "({node})")
    } else {
        node.fmt(f)
    }
}

fn write_path(f: &mut Formatter<'_>, path: &str) -> fmt::Result {
    if is_bare_path(path) {
        f.write_str(path)
    } else {
        write_quoted(f, path)
    }
}

/// A path can be written bare if it lexes back as a single identifier or number
fn is_bare_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '(' | ')' | '\'' | '"'))
        && TokenKind::keyword(path).is_none()
}

fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in value.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}
