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

use crate::grammar::symbols::NonTerminal;
use crate::lexer::token::TokenKind;
use crate::span::Span;
use std::fmt;

/// Fine-grained classification of scanner failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// An ASCII look-alike (`-` or `x`) was used where a Unicode
    /// operator glyph (`−`, `×`) is required. A deliberate rejection,
    /// never a silent substitution.
    SubstituteOperator,

    /// Any other character outside the language's alphabet.
    UnknownCharacter,

    /// A digit run too large for the NUMBER payload. The payload must
    /// equal the scanned digits exactly, so overflow is rejected rather
    /// than saturated.
    NumberOutOfRange,
}

/// Fine-grained classification of parser failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The end marker was reached but the lookahead was not EOF:
    /// well-formed input followed by extra tokens.
    TrailingInput,

    /// The terminal on top of the symbol stack did not match the
    /// lookahead token.
    TerminalMismatch,

    /// The parsing table has no production for the current
    /// (nonterminal, lookahead) pair.
    NoTableEntry,
}

/// Which phase of the front end an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Scan(ScanErrorKind),
    Parse(ParseErrorKind),
}

/// The single error type surfaced by the Glyph front end.
///
/// Both scanning and parsing failures are unrecoverable for the current
/// invocation: the first error aborts, no partial result is produced,
/// and no multi-error batching is attempted.
#[derive(Debug, Clone)]
pub struct GlyphError {
    /// Stable error code (E_SCAN_OPERATOR, E_PARSE_MISMATCH, …)
    pub code: &'static str,

    /// Which phase failed, and how.
    pub kind: ErrorKind,

    /// Human-readable error message, including the rendering of the
    /// offending character or token.
    pub message: String,

    /// Primary source location.
    pub span: Span,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl GlyphError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        kind: ErrorKind,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Scan error: ASCII stand-in for a required Unicode operator glyph.
    pub fn substitute_operator(ch: char, span: Span) -> Self {
        let wanted = if ch == '-' { "− (U+2212)" } else { "× (U+00D7)" };
        Self::new(
            "E_SCAN_OPERATOR",
            ErrorKind::Scan(ScanErrorKind::SubstituteOperator),
            format!("incorrect operator: ASCII '{}' is not accepted here", ch),
            span,
        )
        .with_help(format!("use the Unicode operator {} instead", wanted))
    }

    /// Scan error: character outside the language's alphabet.
    pub fn unknown_character(ch: char, span: Span) -> Self {
        Self::new(
            "E_SCAN_CHAR",
            ErrorKind::Scan(ScanErrorKind::UnknownCharacter),
            format!("unknown character {:?}", ch),
            span,
        )
    }

    /// Scan error: digit run overflows the NUMBER payload.
    pub fn number_out_of_range(digits: &str, span: Span) -> Self {
        Self::new(
            "E_SCAN_NUMBER",
            ErrorKind::Scan(ScanErrorKind::NumberOutOfRange),
            format!("number literal {} is out of range", digits),
            span,
        )
    }

    /// Parse error: the end marker was reached with input left over.
    pub fn trailing_input(found: String, span: Span) -> Self {
        Self::new(
            "E_PARSE_TRAILING",
            ErrorKind::Parse(ParseErrorKind::TrailingInput),
            format!("expected end of input but saw extra input {}", found),
            span,
        )
    }

    /// Parse error: stack-top terminal differs from the lookahead.
    pub fn terminal_mismatch(expected: TokenKind, found: String, span: Span) -> Self {
        Self::new(
            "E_PARSE_MISMATCH",
            ErrorKind::Parse(ParseErrorKind::TerminalMismatch),
            format!("expected {} but saw {}", expected, found),
            span,
        )
    }

    /// Parse error: no parsing-table entry for (nonterminal, lookahead).
    pub fn no_table_entry(nonterminal: NonTerminal, found: String, span: Span) -> Self {
        Self::new(
            "E_PARSE_NO_RULE",
            ErrorKind::Parse(ParseErrorKind::NoTableEntry),
            format!("no rule for {} on lookahead {}", nonterminal, found),
            span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.kind {
            ErrorKind::Scan(_) => "scan error",
            ErrorKind::Parse(_) => "syntax error",
        };
        write!(f, "{}: {}", phase, self.message)
    }
}

impl std::error::Error for GlyphError {}
