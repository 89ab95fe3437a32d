//! Property-based tests for the ksm pipeline
//!
//! These tests use proptest to generate inputs and verify that:
//! 1. Tokenizing, parsing and executing never panics on arbitrary input
//! 2. Declarations round-trip through the store
//! 3. Conditions agree with integer comparison
//! 4. Rendering a parsed line is stable under re-parsing

use ksm::{
    interpreter::{
        evaluator::{core::Context, event::Event},
        lexer::is_keyword,
    },
    parse, run_line, tokenize,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random ASCII lines that might break the pipeline
fn arbitrary_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap()
}

/// Generate lines built from tokens of the language
fn token_soup() -> impl Strategy<Value = String> {
    let token = prop_oneof![Just("declare".to_string()),
                            Just("displayln".to_string()),
                            Just("if".to_string()),
                            Just("case".to_string()),
                            Just("otherwise".to_string()),
                            Just("=".to_string()),
                            Just("==".to_string()),
                            Just("<".to_string()),
                            Just(">".to_string()),
                            Just("(".to_string()),
                            Just(")".to_string()),
                            Just("{".to_string()),
                            Just("}".to_string()),
                            Just("\"".to_string()),
                            identifier(),
                            (0u32..1000).prop_map(|n| n.to_string()),];
    prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.join(" "))
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("keywords are not identifiers", |s| !is_keyword(s))
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![identifier(),
                (0u32..1000).prop_map(|n| n.to_string()),
                "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),]
}

/// Generate syntactically valid lines, nesting blocks up to a few levels
fn statement() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(identifier(), operand()).prop_map(|(name, value)| format!("declare {name} = {value}")),
                           operand().prop_map(|value| format!("displayln({value})")),];
    leaf.prop_recursive(3, 24, 4, |inner| {
            let body = prop::collection::vec(inner, 0..4).prop_map(|b| b.join(" "));
            prop_oneof![(operand(), prop_oneof![Just(">"), Just("<"), Just("==")], operand(), body.clone())
                            .prop_map(|(l, op, r, body)| format!("if case {l} {op} {r} {{ {body} }}")),
                        body.prop_map(|body| format!("otherwise {{ {body} }}")),]
        })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..6).prop_map(|s| s.join(" "))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn pipeline_never_panics_on_arbitrary_input(line in arbitrary_line()) {
        let mut ctx = Context::with_output(Vec::new());
        let _ = run_line(&mut ctx, &line);
    }

    #[test]
    fn pipeline_never_panics_on_token_soup(line in token_soup()) {
        let mut ctx = Context::with_output(Vec::new());
        let _ = run_line(&mut ctx, &line);
    }

    #[test]
    fn lexer_always_reaches_end_of_input(line in arbitrary_line()) {
        let mut lexer = tokenize(&line);
        let mut count = 0;
        while !lexer.next_token().is_end() {
            count += 1;
            prop_assert!(count <= line.len());
        }
    }

    #[test]
    fn declared_values_print_back(name in identifier(), value in 0u64..u64::MAX) {
        let mut ctx = Context::with_output(Vec::new());
        run_line(&mut ctx, &format!("declare {name} = {value}")).unwrap();
        run_line(&mut ctx, &format!("displayln({name})")).unwrap();

        let expected = value.to_string();
        prop_assert_eq!(ctx.variable(&name), Some(expected.as_str()));
        prop_assert_eq!(ctx.output().last(), Some(&Event::Printed(expected)));
    }

    #[test]
    fn conditions_agree_with_integer_comparison(a in -1000i64..1000, b in -1000i64..1000) {
        let mut ctx = Context::with_output(Vec::new());
        run_line(&mut ctx, &format!("declare a = \"{a}\" declare b = \"{b}\"")).unwrap();

        for (op, expected) in [(">", a > b), ("<", a < b), ("==", a == b)] {
            ctx.output_mut().clear();
            run_line(&mut ctx, &format!("if case a {op} b {{ }}")).unwrap();
            let taken = matches!(ctx.output()[0], Event::Branch { taken: true, .. });
            prop_assert_eq!(taken, expected, "a = {}, b = {}, op = {}", a, b, op);
        }
    }

    #[test]
    fn generated_programs_parse(src in program()) {
        prop_assert!(parse(tokenize(&src)).is_ok(), "failed to parse {:?}", src);
    }

    #[test]
    fn rendering_is_stable(src in program()) {
        let rendered = parse(tokenize(&src)).unwrap().to_string();
        let again = parse(tokenize(&rendered)).unwrap().to_string();
        prop_assert_eq!(again, rendered);
    }
}
