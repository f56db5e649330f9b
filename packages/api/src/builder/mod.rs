//! Object-builder front end
//!
//! Functions producing the same [`Node`] trees the DSL parser produces, so a
//! query can be assembled in code and composed with parsed text.
//!
//! ```
//! use dotquery::builder::{all_greater, equals, exists};
//!
//! let tree = equals("role", "admin")
//!     .and(all_greater("scores[*]", 10))
//!     .or(exists("is_superuser"));
//!
//! assert_eq!(tree, dotquery::parse(
//!     "equals role 'admin' and all greater scores[*] 10 or exists is_superuser",
//! )?);
//! # Ok::<(), dotquery::QueryError>(())
//! ```

pub mod conditions;

pub use conditions::*;
pub use dotquery_engine::query::{Condition, Node, Operand, Quantifier};
