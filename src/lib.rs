/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Glyph front end. Wires together the
 *           scanner, the static grammar, the predictive parser, and the
 *           supporting error/diagnostic machinery.
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

//! Glyph is a tiny S-expression language whose operators are Unicode
//! glyphs: `+`, `−` (U+2212), `×` (U+00D7), `=`, `?`, `λ`, `≜`. This
//! crate is its batch compiler front end: a hardened scanner and a
//! table-driven LL(1) predictive parser with explicit parse-tree
//! construction.
//!
//! The public surface is two functions:
//!
//! ```rust
//! use glyph::{tokenize, parse};
//!
//! let tree = parse(tokenize("(+ 2 3)").unwrap()).unwrap();
//! assert_eq!(tree.to_string(), "[PLUS, 2, 3]");
//! ```
//!
//! A call either yields a fully formed tree or a single descriptive
//! [`GlyphError`](error::GlyphError); the first failure aborts, with no
//! recovery and no partial result. The grammar and parsing table are
//! static immutable data, safe to share across unlimited concurrent
//! parses.

/// Source locations (line/column) for tokens and errors.
pub mod span;

/// The scanner: token model, operator glyph table, and `tokenize`.
pub mod lexer;

/// The static grammar: symbols, productions, and the LL(1) table.
pub mod grammar;

/// The predictive parser and its tree-building reductions.
pub mod parser;

/// The parse-tree value type and its renderings.
pub mod tree;

/// Structured front-end errors with stable codes.
pub mod error;

/// Compiler-style caret diagnostics for the CLI.
pub mod diagnostics;

/// The demonstration suite and its JSON reporting.
pub mod harness;

pub use error::GlyphError;
pub use lexer::tokenize;
pub use parser::parse;
pub use tree::{NodeLabel, ParseTree};
