/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Glyph table-driven predictive parser.
 *
 * This module wires together the parser sub-modules:
 *   - The LL(1) stack machine and `parse(tokens)` entry point
 *   - The per-production tree-building reductions
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and both stacks
/// - Exposes the main `parse(tokens)` entry point
pub mod parser;

/// Reduction semantics:
/// - one reduction per production id
/// - pops matched child values, pushes the built node
pub mod reduce;

pub use parser::{parse, Parser, StackItem, StackValue};
