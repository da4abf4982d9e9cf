/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      grammar/symbols.rs
 * Purpose:   Grammar symbol types for the LL(1) predictive parser: the
 *            nonterminals of the Glyph grammar and the terminal /
 *            nonterminal union pushed on the parser's symbol stack.
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

use crate::lexer::token::TokenKind;
use std::fmt;

/// The nonterminals of the Glyph grammar.
///
/// - `S` — the start symbol
/// - `E` — an atomic or parenthesized expression
/// - `P` — the body of a parenthesized form (operator application or a
///   bare application)
/// - `EPrime` — the "zero or more following expressions" continuation
///   used for application argument lists (written E′ in the grammar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    S,
    E,
    P,
    EPrime,
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonTerminal::S => "S",
            NonTerminal::E => "E",
            NonTerminal::P => "P",
            NonTerminal::EPrime => "E'",
        };
        write!(f, "{}", name)
    }
}

/// A grammar symbol: either a terminal (a token kind) or a nonterminal.
///
/// Production right-hand sides are sequences of these. The end marker
/// and the deferred-reduction markers are *parser stack* concerns, not
/// grammar symbols, and live in `parser::StackItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminal),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(kind) => write!(f, "{}", kind),
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
        }
    }
}
