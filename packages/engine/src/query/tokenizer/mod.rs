//! Condition DSL tokenizer
//!
//! Lexical analysis converting a condition string into a flat token sequence.
//! Path expressions and operator names are opaque words here; only quoting,
//! parentheses, regex literals and the reserved keywords are recognized.

mod core;
mod patterns;
mod strings;
mod words;

pub use self::core::Tokenizer;
