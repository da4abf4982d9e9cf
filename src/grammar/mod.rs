/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:     grammar/mod.rs
 * Purpose:  Root module for the static Glyph grammar description.
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

/// Grammar symbol types:
/// - `NonTerminal` (S, E, P, E')
/// - `Symbol` (terminal / nonterminal union)
pub mod symbols;

/// The static grammar data:
/// - the fourteen production right-hand sides
/// - the LL(1) parsing-table lookup
pub mod table;

pub use symbols::{NonTerminal, Symbol};
pub use table::{lookup, rhs, ProductionId};
