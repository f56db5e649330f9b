//! End-to-end query scenarios through the `Query` facade

use dotquery::{ErrorKind, Query, QueryConfig, QueryError, QuerySource};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn query(source: &str) -> Query {
    Query::new(source).unwrap_or_else(|e| panic!("'{source}' should compile: {e}"))
}

#[cfg(test)]
mod documented_scenarios {
    use super::*;

    #[test]
    fn test_equals_on_version_string() {
        assert!(query("equals version '1.0.0'").check(&json!({"version": "1.0.0"})));
    }

    #[test]
    fn test_all_and_any_over_prices() {
        let document = json!({"store": {"book": [{"price": 5}, {"price": 9}]}});
        assert!(!query("all store.book[*].price greater 5").check(&document));
        assert!(query("any store.book[*].price greater 5").check(&document));
    }

    #[test]
    fn test_vacuous_quantifiers_on_empty_document() {
        let document = json!({});
        assert!(query("all store.book[*].price greater 5").check(&document));
        assert!(!query("any store.book[*].price greater 5").check(&document));
    }

    #[test]
    fn test_grouped_admin_query() {
        let q = query(
            "(equals role 'admin' and greater login_count 10) or equals is_superuser true",
        );
        assert!(q.check(&json!({"role": "admin", "login_count": 11})));
        assert!(!q.check(&json!({"role": "admin", "login_count": 10})));
        assert!(q.check(&json!({"role": "guest", "is_superuser": true})));
    }

    #[test]
    fn test_missing_operand_is_a_parse_error() {
        match Query::new("equals role") {
            Err(QueryError::Parse { message, .. }) => {
                assert!(message.contains("equals"), "{message}");
                assert!(message.contains("requires an operand"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod facade {
    use super::*;
    use dotquery::builder::{equals, exists};
    use dotquery::{Node, Quantifier};

    #[test]
    fn test_sources_convert_into_query() {
        let from_text = Query::new("exists a").expect("text");
        let from_string = Query::new(String::from("exists a")).expect("string");
        let from_tree = Query::new(exists("a")).expect("tree");
        assert_eq!(from_text, from_string);
        assert_eq!(from_text, from_tree);
        assert_eq!(
            QuerySource::from("exists a"),
            QuerySource::Text("exists a".into())
        );
    }

    #[test]
    fn test_foreign_trees_are_validated_at_construction() {
        let unknown = Node::condition(Quantifier::Any, "resembles", "a", None);
        assert_eq!(
            Query::new(unknown).expect_err("unknown operator").kind(),
            ErrorKind::UnknownOperator
        );

        let empty = Node::any_of(Vec::new());
        assert_eq!(
            Query::new(empty).expect_err("empty or").kind(),
            ErrorKind::Structural
        );

        let missing = Node::condition(Quantifier::All, "greater", "a", None);
        assert_eq!(
            Query::new(missing).expect_err("missing operand").kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn test_json_round_trip() {
        let q = query("all greater scores[*] 10 and not exists banned");
        let text = q.to_json().expect("serialize");
        let restored = Query::from_json(&text).expect("deserialize");
        assert_eq!(restored, q);
        assert_eq!(restored.tree(), q.tree());

        let error = Query::from_json(r#"{"type": "condition", "op": "nope", "path": "a"}"#)
            .expect_err("unknown operator");
        assert_eq!(error.kind(), ErrorKind::UnknownOperator);
    }

    #[test]
    fn test_composition() {
        let document = json!({"role": "admin", "banned": true});
        let q = query("equals role admin");
        assert!(q.check(&document));

        let narrowed = q.clone().and("not exists banned").expect("compose");
        assert!(!narrowed.check(&document));

        let widened = narrowed.or(equals("role", "admin")).expect("compose");
        assert!(widened.check(&document));

        assert!(!q.clone().negate().check(&document));
        assert_eq!(
            q.and(query("exists banned")).expect("compose").tree(),
            &Query::new("equals role admin and exists banned").expect("text").into_tree()
        );
    }

    #[test]
    fn test_composition_rejects_bad_text() {
        let error = query("exists a").and("equals b").expect_err("missing operand");
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_check_never_fails_and_try_check_reports() {
        init_logging();
        let q = query("exists a");
        assert_eq!(q.try_check(&json!({"a": null})), Ok(true));
        assert!(q.check(&json!({"a": null})));
        assert!(!q.check(&json!([1, 2])));
    }

    #[test]
    fn test_default_config_sees_every_match() {
        let items: Vec<u32> = (0..=10_000).collect();
        let document = json!({ "items": items });
        assert_eq!(query("any equals items[*] 0").try_check(&document), Ok(true));
        assert_eq!(query("all greater items[*] -1").try_check(&document), Ok(true));
        assert_eq!(query("any equals items[*] 10000").try_check(&document), Ok(true));
    }

    #[test]
    fn test_quoted_regex_escapes() {
        let document = json!({"version": "2.14.0"});
        assert!(query(r"matches version '^\d+\.\d+'").check(&document));
        assert!(query(r#"matches version "^\d+\.\d+""#).check(&document));
        assert!(!query(r"matches version '^\d+\.\d+'").check(&json!({"version": "beta"})));
    }

    #[test]
    fn test_config_limits_apply() {
        init_logging();
        let document = json!({"xs": [1, 2, 3]});
        let q = query("all greater xs[*] 0");
        assert!(q.check(&document));

        let limited = q
            .clone()
            .with_config(QueryConfig::default().max_matches(2))
            .expect("valid config");
        assert_eq!(limited.config().max_matches, 2);
        assert!(!limited.check(&document));

        let error = q
            .with_config(QueryConfig::default().max_depth(0))
            .expect_err("zero depth");
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_display_renders_dsl() {
        let q = query("all store.book[*].price greater 5 or not exists x");
        assert_eq!(q.to_string(), "all greater store.book[*].price 5 or not exists x");
    }
}

#[cfg(test)]
mod custom_registry {
    use std::sync::Arc;

    use super::*;
    use dotquery::{Arity, PredicateRegistry};

    #[test]
    fn test_registered_operator_is_usable() {
        let mut registry = PredicateRegistry::builtin();
        registry.register("even", Arity::Zero, |value, _| {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        });
        let registry = Arc::new(registry);

        let q = Query::with_registry("all even xs[*]", Arc::clone(&registry)).expect("compile");
        assert!(q.check(&json!({"xs": [2, 4]})));
        assert!(!q.check(&json!({"xs": [2, 3]})));

        assert_eq!(
            Query::new("all even xs[*]").expect_err("not built in").kind(),
            ErrorKind::UnknownOperator
        );
    }
}
