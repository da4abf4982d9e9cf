/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
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

use crate::error::GlyphError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Glyph front-end errors.
///
/// This printer:
/// - Formats errors with source-name/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for Glyph and designed to remain readable without color.
/// Only the CLI uses it; the library itself surfaces structured
/// `GlyphError` values.
pub struct DiagnosticPrinter {
    /// Full source text of the expression being parsed.
    source: String,

    /// Name of the input for display purposes (e.g. `<args>` for a
    /// command-line expression).
    source_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given input.
    ///
    /// # Arguments
    /// - `source_name` → The display name of the input
    /// - `source` → The full source text of that input
    ///
    /// Both parameters accept any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(source_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// This function:
    /// 1. Extracts line/column information from the error span
    /// 2. Locates the corresponding line of source text
    /// 3. Prints a compiler-style error header
    /// 4. Renders the source line with a caret pointing at the error
    /// 5. Optionally prints a helpful suggestion
    ///
    /// # Output Example
    /// ```text
    /// error[E_SCAN_OPERATOR]: incorrect operator: ASCII '-' is not accepted here
    ///   --> <args>:1:2
    ///    |
    ///   1 | (- 1 2)
    ///    |  ^
    /// help: use the Unicode operator − (U+2212) instead
    /// ```
    pub fn print(&self, error: &GlyphError) {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message,
            self.source_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        // Caret underline pointing at the offending column. The column
        // is counted in characters, matching the scanner's cursor.
        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}
