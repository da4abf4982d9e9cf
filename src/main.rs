/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line entry point. With no arguments, runs the
 *           built-in demonstration suite and writes its JSON reports;
 *           with arguments, parses them as one Glyph expression and
 *           prints the tree or a caret diagnostic.
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

use glyph::diagnostics::DiagnosticPrinter;
use glyph::{parse, tokenize};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return run_suite();
    }

    parse_expression(&args.join(" "))
}

/// Runs the built-in demonstration suite, writing per-case JSON records
/// under `outputs/`.
fn run_suite() -> ExitCode {
    match glyph::harness::run_suite(Path::new("outputs")) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: could not write suite reports: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Parses a single expression from the command line.
fn parse_expression(source: &str) -> ExitCode {
    match tokenize(source).and_then(parse) {
        Ok(tree) => {
            println!("{}", tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            DiagnosticPrinter::new("<args>", source).print(&error);
            ExitCode::FAILURE
        }
    }
}
