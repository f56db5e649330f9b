//! Regular expression literal tokenization (`/pattern/`)

use super::core::{Tokenizer, is_delimiter};
use crate::error::{QueryResult, lex_error};
use crate::query::tokens::TokenKind;

/// Parse a slash-delimited pattern; `\/` stands for a literal slash and every
/// other escape is kept for the regex engine
pub(crate) fn parse_regex_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    start: usize,
) -> QueryResult<usize> {
    let mut i = start + 1; // Skip opening slash
    let mut pattern = String::new();

    while i < chars.len() && chars[i] != '/' {
        if chars[i] == '\\' && i + 1 < chars.len() {
            if chars[i + 1] == '/' {
                pattern.push('/');
            } else {
                pattern.push('\\');
                pattern.push(chars[i + 1]);
            }
            i += 2;
        } else {
            pattern.push(chars[i]);
            i += 1;
        }
    }

    if i >= chars.len() {
        return Err(lex_error("unterminated regex literal", start));
    }

    if i + 1 < chars.len() && !is_delimiter(chars[i + 1]) {
        return Err(lex_error(
            format!("unexpected character '{}' after regex literal", chars[i + 1]),
            i + 1,
        ));
    }

    let text: String = chars[start..=i].iter().collect();
    tokenizer.push(TokenKind::Regex(pattern), text, start);
    Ok(i)
}
