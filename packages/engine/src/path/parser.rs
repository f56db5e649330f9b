//! Path expression parser
//!
//! Converts dotted path text into a [`PathExpression`]. Works on a character vector
//! so error offsets are character positions.

use super::selectors::{PathExpression, PathSelector};
use crate::error::{QueryResult, path_error};

/// Parser for dotted path expressions
pub struct PathParser<'a> {
    input: &'a str,
    chars: Vec<char>,
    position: usize,
}

impl<'a> PathParser<'a> {
    /// Create new path parser
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Compile path text into a selector chain
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Path` for empty segments, unterminated brackets or quotes,
    /// malformed indices and dangling `.`/`..`.
    pub fn compile(input: &'a str) -> QueryResult<PathExpression> {
        PathParser::new(input).parse()
    }

    /// Parse the complete path
    pub fn parse(mut self) -> QueryResult<PathExpression> {
        let mut selectors = Vec::new();

        if self.peek() == Some('$') {
            self.position += 1;
            if let Some(c) = self.peek()
                && c != '.'
                && c != '['
            {
                return Err(self.error("property access requires '.' or '[' after '$'"));
            }
        } else if let Some(c) = self.peek()
            && c != '.'
            && c != '['
        {
            // Bare leading name: `store.book` is shorthand for `$.store.book`
            selectors.push(self.parse_name_or_wildcard()?);
        }

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.position += 1;
                    if self.peek() == Some('.') {
                        self.position += 1;
                        selectors.push(PathSelector::Descendants);
                        match self.peek() {
                            Some('[') => {}
                            Some('.') => {
                                return Err(self.error("'...' is invalid, use '..' for descendants"));
                            }
                            Some(_) => selectors.push(self.parse_name_or_wildcard()?),
                            None => {
                                return Err(
                                    self.error("descendant segment '..' must be followed by a selector")
                                );
                            }
                        }
                    } else if self.peek().is_none() {
                        return Err(self.error("incomplete property access (ends with '.')"));
                    } else if self.peek() == Some('[') {
                        return Err(self.error("unexpected '[' after '.'"));
                    } else {
                        selectors.push(self.parse_name_or_wildcard()?);
                    }
                }
                '[' => {
                    self.position += 1;
                    selectors.push(self.parse_bracket()?);
                }
                _ => return Err(self.error(format!("unexpected character '{c}'"))),
            }
        }

        Ok(PathExpression::new(selectors, self.input))
    }

    /// Parse a dotted name segment, `*` becomes a wildcard
    fn parse_name_or_wildcard(&mut self) -> QueryResult<PathSelector> {
        let start = self.position;
        while let Some(c) = self.peek() {
            if c == '.' || c == '[' {
                break;
            }
            if c == ']' {
                return Err(self.error("unexpected ']' in property name"));
            }
            self.position += 1;
        }

        let name: String = self.chars[start..self.position].iter().collect();
        match name.as_str() {
            "" => Err(self.error("empty property name")),
            "*" => Ok(PathSelector::Wildcard),
            _ => Ok(PathSelector::Child(name)),
        }
    }

    /// Parse the inside of `[...]`; the opening bracket is already consumed
    fn parse_bracket(&mut self) -> QueryResult<PathSelector> {
        self.skip_spaces();
        let selector = match self.peek() {
            Some('*') => {
                self.position += 1;
                PathSelector::Wildcard
            }
            Some(quote @ ('\'' | '"')) => {
                self.position += 1;
                PathSelector::Child(self.parse_quoted(quote)?)
            }
            Some(c) if c.is_ascii_digit() || c == '-' || c == ':' => self.parse_index_or_slice()?,
            Some(c) => return Err(self.error(format!("unexpected character '{c}' in brackets"))),
            None => return Err(self.error("unterminated bracket selector")),
        };

        self.skip_spaces();
        match self.peek() {
            Some(']') => {
                self.position += 1;
                Ok(selector)
            }
            Some(c) => Err(self.error(format!("expected ']', found '{c}'"))),
            None => Err(self.error("unterminated bracket selector")),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> QueryResult<String> {
        let start = self.position;
        let mut value = String::new();
        while let Some(c) = self.peek() {
            self.position += 1;
            if c == quote {
                return Ok(value);
            }
            if c == '\\' {
                match self.peek() {
                    Some(escaped @ ('\\' | '\'' | '"')) => {
                        value.push(escaped);
                        self.position += 1;
                    }
                    _ => return Err(self.error("invalid escape sequence in quoted name")),
                }
            } else {
                value.push(c);
            }
        }
        self.position = start;
        Err(self.error("unterminated quoted property name"))
    }

    fn parse_index_or_slice(&mut self) -> QueryResult<PathSelector> {
        let start = self.parse_optional_integer()?;
        self.skip_spaces();
        if self.peek() != Some(':') {
            return match start {
                Some(index) => Ok(PathSelector::Index(index)),
                None => Err(self.error("expected array index")),
            };
        }
        self.position += 1;
        self.skip_spaces();
        let end = self.parse_optional_integer()?;
        Ok(PathSelector::Slice { start, end })
    }

    fn parse_optional_integer(&mut self) -> QueryResult<Option<i64>> {
        let start = self.position;
        if self.peek() == Some('-') {
            self.position += 1;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position == start {
            return Ok(None);
        }
        let digits: String = self.chars[start..self.position].iter().collect();
        digits
            .parse::<i64>()
            .map(Some)
            .map_err(|_| self.error(format!("invalid array index '{digits}'")))
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.position += 1;
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn error(&self, reason: impl Into<String>) -> crate::error::QueryError {
        path_error(
            self.input,
            format!("{} at position {}", reason.into(), self.position),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(path: &str) -> Vec<PathSelector> {
        PathParser::compile(path)
            .expect("path should compile")
            .selectors()
            .to_vec()
    }

    #[test]
    fn bare_and_rooted_paths_are_equivalent() {
        assert_eq!(selectors("store.book"), selectors("$.store.book"));
        assert_eq!(
            selectors("store.book"),
            vec![
                PathSelector::Child("store".into()),
                PathSelector::Child("book".into())
            ]
        );
    }

    #[test]
    fn root_only_paths() {
        assert!(selectors("$").is_empty());
        assert!(selectors("").is_empty());
    }

    #[test]
    fn brackets_and_wildcards() {
        assert_eq!(
            selectors("store.book[*].price"),
            vec![
                PathSelector::Child("store".into()),
                PathSelector::Child("book".into()),
                PathSelector::Wildcard,
                PathSelector::Child("price".into()),
            ]
        );
        assert_eq!(
            selectors("a[-1]['b c'][1:3]"),
            vec![
                PathSelector::Child("a".into()),
                PathSelector::Index(-1),
                PathSelector::Child("b c".into()),
                PathSelector::Slice {
                    start: Some(1),
                    end: Some(3)
                },
            ]
        );
    }

    #[test]
    fn descendants() {
        assert_eq!(
            selectors("store..price"),
            vec![
                PathSelector::Child("store".into()),
                PathSelector::Descendants,
                PathSelector::Child("price".into()),
            ]
        );
        assert_eq!(
            selectors("$..[0]"),
            vec![PathSelector::Descendants, PathSelector::Index(0)]
        );
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for path in ["a.", "a..", "a...b", "a[", "a[0", "a['x]", "a[x]", "$a", "a.[0]"] {
            assert!(PathParser::compile(path).is_err(), "expected error for {path}");
        }
    }
}
