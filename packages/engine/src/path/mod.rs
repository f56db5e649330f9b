//! Dotted path addressing over JSON documents
//!
//! The query core treats a condition's path as an opaque string and hands it to a
//! [`PathResolver`]. This module supplies the default resolver, which understands a
//! compact dotted syntax:
//!
//! - `store.book` / `$.store.book` - child properties (leading `$` optional)
//! - `book[0]`, `book[-1]`, `book.0` - array indices, negative from the end
//! - `book[1:3]`, `book[:2]` - array slices
//! - `book[*]`, `store.*` - wildcards over array elements or object values
//! - `store..price`, `..[0]` - descendants at any depth
//! - `['first name']` - quoted property names
//!
//! Matches are returned as borrowed references, array elements in index order and
//! object members in key order. The document is never cloned or mutated.

mod engine;
mod parser;
mod resolver;
mod selectors;

pub use engine::SelectorEngine;
pub use parser::PathParser;
pub use resolver::{DotPathResolver, PathResolver};
pub use selectors::{PathExpression, PathSelector};
