//! Condition DSL, query tree, predicates and evaluation

pub mod ast;
mod display;
pub mod evaluator;
pub mod parser;
pub mod registry;
pub mod tokenizer;
pub mod tokens;

pub use ast::{Condition, Node, Operand, Quantifier};
pub use evaluator::{Evaluator, validate};
pub use parser::{Parser, parse, parse_with_registry};
pub use registry::{Arity, DEFAULT_REGISTRY, Predicate, PredicateFn, PredicateRegistry};
pub use tokenizer::Tokenizer;
pub use tokens::{Token, TokenKind};
