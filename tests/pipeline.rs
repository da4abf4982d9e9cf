/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     tests/pipeline.rs
 * Purpose:  End-to-end coverage of the scanner + parser pipeline: every
 *           required positive and negative scenario, exercised through
 *           the two public entry points only.
 *
 * License:
 * This file is part of the Glyph language project.
 *
 * Glyph is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use glyph::error::{ErrorKind, ParseErrorKind, ScanErrorKind};
use glyph::{parse, tokenize, GlyphError, ParseTree};
use serde_json::{json, Value};

fn pipeline(source: &str) -> Result<ParseTree, GlyphError> {
    tokenize(source).and_then(parse)
}

fn tree_json(source: &str) -> Value {
    let tree = pipeline(source).expect("expected a successful parse");
    serde_json::to_value(&tree).expect("trees always serialize")
}

#[test]
fn positive_scenarios_produce_the_expected_trees() {
    assert_eq!(tree_json("42"), json!(42));
    assert_eq!(tree_json("x"), json!("x"));
    assert_eq!(tree_json("(+ 2 3)"), json!(["PLUS", 2, 3]));
    assert_eq!(tree_json("(× x 5)"), json!(["MULT", "x", 5]));
    assert_eq!(tree_json("(+ (× 2 3) 4)"), json!(["PLUS", ["MULT", 2, 3], 4]));
    assert_eq!(
        tree_json("(? (= x 0) 1 0)"),
        json!(["COND", ["EQUALS", "x", 0], 1, 0])
    );
    assert_eq!(tree_json("(λ x x)"), json!(["LAMBDA", "x", "x"]));
    assert_eq!(tree_json("(≜ y 10 y)"), json!(["LET", "y", 10, "y"]));
    assert_eq!(
        tree_json("((λ x (+ x 1)) 5)"),
        json!(["APPLY", ["LAMBDA", "x", ["PLUS", "x", 1]], 5])
    );
}

#[test]
fn subtraction_and_deeper_nesting_parse() {
    assert_eq!(tree_json("(− 9 (− 4 1))"), json!(["MINUS", 9, ["MINUS", 4, 1]]));
    assert_eq!(
        tree_json("(≜ f (λ n (× n n)) (f 7))"),
        json!(["LET", "f", ["LAMBDA", "n", ["MULT", "n", "n"]], ["APPLY", "f", 7]])
    );
}

#[test]
fn number_payloads_equal_their_digit_runs() {
    assert_eq!(tree_json("9223372036854775807"), json!(9223372036854775807i64));

    // A digit run past i64::MAX never yields a wrong payload; the scan
    // rejects it outright.
    let err = pipeline("99999999999999999999").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Scan(ScanErrorKind::NumberOutOfRange)
    ));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(tree_json("  ( +\n\t2   3 ) "), json!(["PLUS", 2, 3]));
}

#[test]
fn missing_rparen_is_a_parse_error() {
    let err = pipeline("(+ 2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(_)));
}

#[test]
fn unmatched_rparen_is_a_parse_error() {
    let err = pipeline(")").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Parse(ParseErrorKind::NoTableEntry)
    ));
}

#[test]
fn operator_arity_is_fixed() {
    let err = pipeline("(+ 2 3 4)").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Parse(ParseErrorKind::TerminalMismatch)
    ));

    let err = pipeline("(? 1 2)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(_)));
}

#[test]
fn ascii_hyphen_is_a_scan_error_in_any_context() {
    for source in ["(- 1 2)", "-", "(+ 1 -)", "(λ y -)"] {
        let err = pipeline(source).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Scan(ScanErrorKind::SubstituteOperator)),
            "{:?} should be rejected as a substitute operator",
            source
        );
    }
}

#[test]
fn parse_errors_render_the_offending_token() {
    let err = pipeline("(+ 2 3 4)").unwrap_err();
    assert!(err.message.contains("NUMBER(4)"), "got: {}", err.message);

    let err = pipeline("42 y").unwrap_err();
    assert!(err.message.contains("IDENT(y)"), "got: {}", err.message);
}

#[test]
fn repeated_parses_of_identical_input_agree() {
    let source = "((λ x (+ x 1)) 5)";
    assert_eq!(pipeline(source).unwrap(), pipeline(source).unwrap());
    assert_eq!(tree_json(source), tree_json(source));
}

#[test]
fn shared_table_supports_concurrent_parses() {
    // The grammar/table pair is static immutable data; parses carry all
    // their own state and may run on any number of threads at once.
    let handles: Vec<_> = (0..8)
        .map(|n| {
            std::thread::spawn(move || {
                let source = format!("(+ {} (× {} 2))", n, n);
                let tree = pipeline(&source).unwrap();
                serde_json::to_value(&tree).unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let got = handle.join().unwrap();
        assert_eq!(got, json!(["PLUS", n, ["MULT", n, 2]]));
    }
}
