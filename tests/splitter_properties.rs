//! Property-based tests for the statement recognizer.
//!
//! Random statement bodies, literal contents, and batch sizes exercise
//! the boundary rules the unit tests pin down by example: semicolon
//! counting away from literals, literal opacity, incompleteness
//! monotonicity, and rendering idempotence.

use cqlshell::{recognize, split};
use proptest::prelude::*;

/// Statement bodies that cannot collide with shell-command words or
/// literal delimiters.
fn body() -> impl Strategy<Value = String> {
    "[a-z0-9_ ]{0,20}".prop_map(|s| format!("select {s}"))
}

proptest! {
    #[test]
    fn n_terminated_statements_split_into_n_strings(bodies in prop::collection::vec(body(), 1..8)) {
        let input: String = bodies
            .iter()
            .map(|b| format!("{b};"))
            .collect::<Vec<_>>()
            .join(" ");
        let statements = split(&input).unwrap();
        prop_assert_eq!(statements.len(), bodies.len());
        for statement in &statements {
            prop_assert!(statement.ends_with(';'));
        }
    }

    #[test]
    fn semicolons_inside_string_literals_never_split(content in "[a-z;, \\n]{0,30}") {
        let input = format!("INSERT INTO t (a) VALUES ('{content}');");
        prop_assert_eq!(split(&input).unwrap().len(), 1);
    }

    #[test]
    fn semicolons_inside_dollar_quotes_never_split(content in "[a-z;'\" \\n]{0,30}") {
        let input = format!("INSERT INTO t (a) VALUES ($${content}$$);");
        prop_assert_eq!(split(&input).unwrap().len(), 1);
    }

    #[test]
    fn unclosed_string_is_incomplete_until_closed(content in "[a-z;, ]{0,30}") {
        let open = format!("SELECT '{content}");
        prop_assert!(recognize(&open).unwrap().incomplete);

        let closed = format!("{open}'");
        prop_assert!(!recognize(&closed).unwrap().incomplete);
    }

    #[test]
    fn batch_is_one_statement_regardless_of_size(n in 1usize..12) {
        let mut input = String::from("BEGIN BATCH ");
        for i in 0..n {
            input.push_str(&format!("INSERT INTO t (a) VALUES ({i}); "));
        }

        prop_assert!(recognize(&input).unwrap().incomplete);

        input.push_str("APPLY BATCH;");
        let result = recognize(&input).unwrap();
        prop_assert!(!result.incomplete);
        prop_assert_eq!(result.statements.len(), 1);
    }

    #[test]
    fn rendering_is_idempotent_for_simple_statements(bodies in prop::collection::vec(body(), 1..5)) {
        let input: String = bodies
            .iter()
            .map(|b| format!("{b};"))
            .collect::<Vec<_>>()
            .join("\n");
        for statement in split(&input).unwrap() {
            let again = split(&statement).unwrap();
            prop_assert_eq!(&again, &[statement.clone()]);
        }
    }
}
