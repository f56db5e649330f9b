//! Bare word tokenization: keywords, booleans, numbers and identifiers

use serde_json::Number;

use super::core::{Tokenizer, is_delimiter};
use crate::query::tokens::TokenKind;

/// Parse a bare word starting at `start`, returning the index of its last character
pub(crate) fn parse_word(tokenizer: &mut Tokenizer, chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && !is_delimiter(chars[i]) {
        i += 1;
    }
    let word: String = chars[start..i].iter().collect();

    let kind = TokenKind::keyword(&word)
        .or_else(|| {
            serde_json::from_str::<Number>(&word)
                .ok()
                .map(TokenKind::Number)
        })
        .unwrap_or_else(|| TokenKind::Ident(word.clone()));

    tokenizer.push(kind, word, start);
    i - 1 // Adjust for loop increment
}
