/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      harness.rs
 * Purpose:   The demonstration test suite for the Glyph front end: runs
 *            the required positive and negative cases, writes one JSON
 *            record per case, and reports one-line summaries.
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

use crate::error::{ErrorKind, GlyphError};
use crate::lexer::tokenize;
use crate::parser::parse;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::io;
use std::path::Path;

/// What a demonstration case expects from the front end.
pub enum Expectation {
    /// A successful parse producing exactly this tree (in its JSON
    /// rendering).
    Tree(Value),

    /// A scan failure whose message contains the given fragment.
    ScanFailure(&'static str),

    /// Any parse failure (the syntax-error subtype is the parser's
    /// business; the case only asserts that parsing is refused).
    ParseFailure,
}

/// One named demonstration case.
pub struct TestCase {
    pub name: &'static str,
    pub src: &'static str,
    pub expectation: Expectation,
}

/// The serialized per-case record written under the output directory:
/// `{name, input, expected, actual, pass}`.
#[derive(Serialize)]
pub struct TestRecord {
    pub name: String,
    pub input: String,
    pub expected: Value,
    pub actual: Value,
    pub pass: bool,
}

/// Overall suite statistics, written as `summary.json`.
#[derive(Serialize)]
pub struct SuiteSummary {
    pub generated_at: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// The built-in demonstration suite.
///
/// Unicode reference: × (U+00D7), − (U+2212), λ (U+03BB), ≜ (U+225C).
pub fn builtin_suite() -> Vec<TestCase> {
    use Expectation::{ParseFailure, ScanFailure, Tree};

    vec![
        // Basic expressions
        TestCase {
            name: "basic_number",
            src: "42",
            expectation: Tree(json!(42)),
        },
        TestCase {
            name: "basic_ident",
            src: "x",
            expectation: Tree(json!("x")),
        },
        TestCase {
            name: "basic_plus",
            src: "(+ 2 3)",
            expectation: Tree(json!(["PLUS", 2, 3])),
        },
        TestCase {
            name: "basic_mult",
            src: "(× x 5)",
            expectation: Tree(json!(["MULT", "x", 5])),
        },
        // Nested expressions
        TestCase {
            name: "nested_plus_mult",
            src: "(+ (× 2 3) 4)",
            expectation: Tree(json!(["PLUS", ["MULT", 2, 3], 4])),
        },
        TestCase {
            name: "nested_cond",
            src: "(? (= x 0) 1 0)",
            expectation: Tree(json!(["COND", ["EQUALS", "x", 0], 1, 0])),
        },
        // Function expressions
        TestCase {
            name: "func_lambda_id",
            src: "(λ x x)",
            expectation: Tree(json!(["LAMBDA", "x", "x"])),
        },
        TestCase {
            name: "func_let",
            src: "(≜ y 10 y)",
            expectation: Tree(json!(["LET", "y", 10, "y"])),
        },
        TestCase {
            name: "func_apply",
            src: "((λ x (+ x 1)) 5)",
            expectation: Tree(json!(["APPLY", ["LAMBDA", "x", ["PLUS", "x", 1]], 5])),
        },
        // Parse errors
        TestCase {
            name: "err_missing_rparen",
            src: "(+ 2",
            expectation: ParseFailure,
        },
        TestCase {
            name: "err_unmatched_rparen",
            src: ")",
            expectation: ParseFailure,
        },
        TestCase {
            name: "err_wrong_arity_plus",
            src: "(+ 2 3 4)",
            expectation: ParseFailure,
        },
        // Scan errors: ASCII '-' must be rejected in this language
        TestCase {
            name: "err_ascii_minus_operator",
            src: "(- 1 2)",
            expectation: ScanFailure("incorrect operator"),
        },
    ]
}

fn error_value(error: &GlyphError) -> Value {
    json!({ "error": error.code, "message": error.to_string() })
}

/// Runs a single case through `tokenize` + `parse` and judges the
/// outcome against the case's expectation.
pub fn run_case(case: &TestCase) -> TestRecord {
    let outcome = tokenize(case.src).and_then(parse);

    let (expected, actual, pass) = match (&case.expectation, &outcome) {
        (Expectation::Tree(want), Ok(tree)) => {
            let got = serde_json::to_value(tree).unwrap_or(Value::Null);
            let pass = got == *want;
            (want.clone(), got, pass)
        }
        (Expectation::Tree(want), Err(error)) => {
            (want.clone(), error_value(error), false)
        }
        (Expectation::ScanFailure(fragment), Err(error)) => {
            let pass = matches!(error.kind, ErrorKind::Scan(_))
                && error.message.contains(fragment);
            (json!({ "error": "scan" }), error_value(error), pass)
        }
        (Expectation::ParseFailure, Err(error)) => {
            let pass = matches!(error.kind, ErrorKind::Parse(_));
            (json!({ "error": "syntax" }), error_value(error), pass)
        }
        (Expectation::ScanFailure(_), Ok(tree)) | (Expectation::ParseFailure, Ok(tree)) => {
            let got = serde_json::to_value(tree).unwrap_or(Value::Null);
            (json!({ "error": "expected a failure" }), got, false)
        }
    };

    TestRecord {
        name: case.name.to_string(),
        input: case.src.to_string(),
        expected,
        actual,
        pass,
    }
}

/// Runs the whole built-in suite.
///
/// For each case this writes `<out_dir>/<name>.json` (pretty-printed;
/// serde_json leaves the Unicode operators readable) and prints a
/// one-line PASS/FAIL summary. A `summary.json` with overall stats and
/// a generation timestamp is written last.
///
/// # Returns
/// The suite summary, so the caller can pick an exit code.
pub fn run_suite(out_dir: &Path) -> io::Result<SuiteSummary> {
    fs::create_dir_all(out_dir)?;

    let cases = builtin_suite();
    let mut passed = 0;

    for case in &cases {
        let record = run_case(case);

        let path = out_dir.join(format!("{}.json", record.name));
        let body = serde_json::to_string_pretty(&record)?;
        fs::write(&path, body)?;

        let verdict = if record.pass { "PASS" } else { "FAIL" };
        println!("[{}] {:<24} {}", verdict, record.name, record.input);

        if record.pass {
            passed += 1;
        }
    }

    let summary = SuiteSummary {
        generated_at: Utc::now().to_rfc3339(),
        total: cases.len(),
        passed,
        failed: cases.len() - passed,
    };

    let body = serde_json::to_string_pretty(&summary)?;
    fs::write(out_dir.join("summary.json"), body)?;

    println!(
        "\n{} passed, {} failed, {} total",
        summary.passed, summary.failed, summary.total
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_builtin_suite_passes_end_to_end() {
        for case in builtin_suite() {
            let record = run_case(&case);
            assert!(
                record.pass,
                "case {} failed: expected {} got {}",
                record.name, record.expected, record.actual
            );
        }
    }

    #[test]
    fn records_carry_the_original_input() {
        let case = &builtin_suite()[0];
        let record = run_case(case);
        assert_eq!(record.input, "42");
        assert_eq!(record.expected, serde_json::json!(42));
    }
}
