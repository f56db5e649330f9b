//! Builder front end tests
//!
//! Trees assembled in code must serialize exactly like the parsed DSL.

use dotquery::builder::*;
use dotquery::{Operand, Quantifier, parse};

fn assert_same(built: &Node, source: &str) {
    let parsed = parse(source).unwrap_or_else(|e| panic!("'{source}' should parse: {e}"));
    assert_eq!(built, &parsed, "{source}");
    assert_eq!(
        built.to_json().expect("serialize"),
        parsed.to_json().expect("serialize"),
        "{source}"
    );
}

#[cfg(test)]
mod equivalence {
    use super::*;

    #[test]
    fn test_single_conditions() {
        assert_same(&equals("version", "1.0.0"), "equals version '1.0.0'");
        assert_same(&greater("price", 5), "greater price 5");
        assert_same(&less("price", 2.5), "less price 2.5");
        assert_same(&contains("tags", "rust"), "contains tags rust");
        assert_same(&contains("title", Operand::regex("^a")), "contains title /^a/");
        assert_same(&matches("name", "J.*"), "matches name /J.*/");
        assert_same(&exists("archived"), "exists archived");
        assert_same(&equals("flag", true), "equals flag true");
    }

    #[test]
    fn test_universal_variants() {
        assert_same(&all_equals("xs[*]", 1), "all equals xs[*] 1");
        assert_same(&all_greater("store.book[*].price", 5), "all greater store.book[*].price 5");
        assert_same(&all_less("xs[*]", -3), "all less xs[*] -3");
        assert_same(&all_contains("xs[*].tags", "a"), "all contains xs[*].tags 'a'");
        assert_same(&all_matches("xs[*]", "\\d"), "all matches xs[*] /\\d/");
        assert_same(&all_exists("xs[*]"), "all exists xs[*]");
    }

    #[test]
    fn test_generic_condition() {
        assert_same(
            &condition(Quantifier::All, "equals", "a", Some(Operand::from("x"))),
            "all equals a x",
        );
    }

    #[test]
    fn test_chaining_matches_parser_folding() {
        assert_same(
            &exists("a").and(exists("b")).and(exists("c")),
            "exists a and exists b and exists c",
        );
        assert_same(
            &exists("a").and(exists("b")).and(exists("c")),
            "(exists a and exists b) and exists c",
        );
        assert_same(
            &exists("a").or(exists("b")).or(exists("c")),
            "exists a or exists b or exists c",
        );
    }

    #[test]
    fn test_mixed_composition() {
        assert_same(
            &equals("role", "admin")
                .and(greater("login_count", 10))
                .or(equals("is_superuser", true)),
            "(equals role 'admin' and greater login_count 10) or equals is_superuser true",
        );
        assert_same(
            &exists("a").and(exists("b").or(exists("c")).negate()),
            "exists a and not (exists b or exists c)",
        );
        assert_same(
            &Node::all_of(vec![exists("a"), Node::any_of(vec![exists("b"), exists("c")])]),
            "exists a and (exists b or exists c)",
        );
    }

    #[test]
    fn test_integer_and_float_operands_differ() {
        assert_ne!(greater("price", 5), greater("price", 5.0));
        assert_same(&greater("price", 5.0), "greater price 5.0");
    }
}
