//! String literal tokenization with escape sequence handling
//!
//! Handles single- and double-quoted literals including `\uXXXX` escapes and
//! UTF-16 surrogate pairs. A backslash before any other character is kept as
//! written, so regex text such as `'^\d+\.\d+'` passes through untouched.

use super::core::Tokenizer;
use crate::error::{QueryResult, lex_error};
use crate::query::tokens::TokenKind;

/// Parse string literal with quote handling and escape sequences
pub(crate) fn parse_string_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    start: usize,
) -> QueryResult<usize> {
    let quote = chars[start];
    let mut i = start + 1; // Skip opening quote
    let mut value = String::new();

    while i < chars.len() && chars[i] != quote {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 1; // Skip backslash
            match chars[i] {
                '"' => value.push('"'),
                '\'' => value.push('\''),
                '\\' => value.push('\\'),
                '/' => value.push('/'),
                'b' => value.push('\u{0008}'),
                'f' => value.push('\u{000C}'),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'u' => {
                    i = parse_unicode_escape(chars, i, &mut value)?;
                }
                other => {
                    value.push('\\');
                    value.push(other);
                }
            }
        } else {
            value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(lex_error("unterminated string literal", start));
    }

    let text: String = chars[start..=i].iter().collect();
    tokenizer.push(TokenKind::String(value), text, start);
    Ok(i)
}

/// Parse `\uXXXX` at `i` (pointing at the `u`), returning the index of the last hex digit consumed
fn parse_unicode_escape(chars: &[char], i: usize, value: &mut String) -> QueryResult<usize> {
    let code_point = read_hex4(chars, i + 1)
        .ok_or_else(|| lex_error("invalid unicode escape sequence", i - 1))?;

    if (0xD800..=0xDBFF).contains(&code_point) {
        // High surrogate - a low surrogate escape must follow
        let low = (chars.get(i + 5) == Some(&'\\') && chars.get(i + 6) == Some(&'u'))
            .then(|| read_hex4(chars, i + 7))
            .flatten()
            .filter(|low| (0xDC00..=0xDFFF).contains(low))
            .ok_or_else(|| {
                lex_error("high surrogate not followed by valid low surrogate", i - 1)
            })?;
        let scalar = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
        let c = char::from_u32(scalar)
            .ok_or_else(|| lex_error("invalid surrogate pair result", i - 1))?;
        value.push(c);
        Ok(i + 10)
    } else if (0xDC00..=0xDFFF).contains(&code_point) {
        Err(lex_error(
            "low surrogate without preceding high surrogate",
            i - 1,
        ))
    } else {
        let c = char::from_u32(code_point)
            .ok_or_else(|| lex_error("invalid unicode code point", i - 1))?;
        value.push(c);
        Ok(i + 4)
    }
}

fn read_hex4(chars: &[char], from: usize) -> Option<u32> {
    let digits: String = chars.get(from..from + 4)?.iter().collect();
    u32::from_str_radix(&digits, 16).ok()
}
