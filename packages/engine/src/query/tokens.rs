//! Token definitions for condition DSL lexical analysis
//!
//! Defines the token kinds produced by the tokenizer and helpers the parser uses
//! to classify them.

use serde_json::Number;

/// Kind of a lexed token, carrying the decoded literal where there is one
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Structural tokens
    /// Left parenthesis token (()
    LeftParen,
    /// Right parenthesis token ())
    RightParen,

    // Keywords
    /// Conjunction keyword (and)
    And,
    /// Disjunction keyword (or)
    Or,
    /// Negation keyword (not)
    Not,
    /// Existential quantifier keyword (any)
    Any,
    /// Universal quantifier keyword (all)
    All,

    // Literals
    /// Quoted string literal, escapes decoded
    String(String),
    /// Bare word that parses as a JSON number
    Number(Number),
    /// Boolean literal (true / false)
    Boolean(bool),
    /// Regular expression literal (/pattern/), slashes stripped
    Regex(String),

    /// Operator name, path expression or bare operand word
    Ident(String),

    /// End of input
    Eof,
}

/// A token with its source text and character offset
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Text to show in diagnostics; `end of input` for [`TokenKind::Eof`]
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.kind == TokenKind::Eof {
            "end of input"
        } else {
            &self.text
        }
    }
}

impl TokenKind {
    /// Map a bare word onto its reserved keyword, if it is one
    ///
    /// Keywords are case-sensitive: only the lowercase spellings are reserved.
    #[inline]
    #[must_use]
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            "any" => Some(TokenKind::Any),
            "all" => Some(TokenKind::All),
            "true" => Some(TokenKind::Boolean(true)),
            "false" => Some(TokenKind::Boolean(false)),
            _ => None,
        }
    }

    /// Check if token can stand in the path position of a condition
    #[inline]
    #[must_use]
    pub fn can_be_path(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_) | TokenKind::String(_) | TokenKind::Number(_)
        )
    }
}
