/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Glyph scanner.
 *
 * This module wires together the scanning sub-modules:
 *   - Token model (kinds, payloads, spans)
 *   - Operator glyph classification
 *   - The cursor-based scanner itself
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

/// Token model:
/// - `TokenKind` (fieldless categories, also the grammar's terminals)
/// - `TokenValue` (NUMBER / IDENT payloads)
/// - `Token` (kind + payload + span)
pub mod token;

/// Operator glyph classification:
/// - Unicode-exact single-character operator table
/// - ASCII look-alike detection (`-`, `x`)
pub mod operators;

/// The scanner:
/// - `Lexer` cursor machinery
/// - `tokenize(source)` entry point
pub mod lexer;

pub use lexer::tokenize;
pub use token::{Token, TokenKind, TokenValue};
