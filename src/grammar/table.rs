/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      grammar/table.rs
 * Purpose:   The fourteen productions of the Glyph grammar and the LL(1)
 *            parsing table that drives the predictive parser.
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

use crate::grammar::symbols::{NonTerminal, Symbol};
use crate::lexer::token::TokenKind;

/// A production id, 1 through 14.
pub type ProductionId = u8;

use NonTerminal::{EPrime, E, P, S};
use Symbol::{NonTerminal as N, Terminal as T};
use TokenKind::{Cond, Equals, Ident, LParen, Lambda, Let, Minus, Mult, Number, Plus, RParen};

/// The grammar of the Glyph language, one constant per production:
///
/// ```text
///  1: S  → E
///  2: E  → NUMBER
///  3: E  → IDENT
///  4: E  → ( P )
///  5: P  → + E E
///  6: P  → − E E
///  7: P  → × E E
///  8: P  → = E E
///  9: P  → ? E E E
/// 10: P  → λ IDENT E
/// 11: P  → ≜ IDENT E E
/// 12: P  → E E'
/// 13: E' → E E'
/// 14: E' → ε
/// ```
///
/// Compile-time constants: the grammar is static, immutable, and shared
/// by reference across any number of concurrent parses.
const RHS_1: &[Symbol] = &[N(E)];
const RHS_2: &[Symbol] = &[T(Number)];
const RHS_3: &[Symbol] = &[T(Ident)];
const RHS_4: &[Symbol] = &[T(LParen), N(P), T(RParen)];
const RHS_5: &[Symbol] = &[T(Plus), N(E), N(E)];
const RHS_6: &[Symbol] = &[T(Minus), N(E), N(E)];
const RHS_7: &[Symbol] = &[T(Mult), N(E), N(E)];
const RHS_8: &[Symbol] = &[T(Equals), N(E), N(E)];
const RHS_9: &[Symbol] = &[T(Cond), N(E), N(E), N(E)];
const RHS_10: &[Symbol] = &[T(Lambda), T(Ident), N(E)];
const RHS_11: &[Symbol] = &[T(Let), T(Ident), N(E), N(E)];
const RHS_12: &[Symbol] = &[N(E), N(EPrime)];
const RHS_13: &[Symbol] = &[N(E), N(EPrime)];
const RHS_14: &[Symbol] = &[]; // ε

/// Returns the right-hand side of a production by id.
///
/// Ids outside 1–14 do not exist; the parser only ever passes ids it
/// obtained from `lookup`, so the out-of-range arm is unreachable in
/// practice and maps to the empty production.
pub fn rhs(id: ProductionId) -> &'static [Symbol] {
    match id {
        1 => RHS_1,
        2 => RHS_2,
        3 => RHS_3,
        4 => RHS_4,
        5 => RHS_5,
        6 => RHS_6,
        7 => RHS_7,
        8 => RHS_8,
        9 => RHS_9,
        10 => RHS_10,
        11 => RHS_11,
        12 => RHS_12,
        13 => RHS_13,
        _ => RHS_14,
    }
}

/// The LL(1) parsing table: `(nonterminal, lookahead) → production id`.
///
/// Total on the valid language, partial everywhere else: `None` is the
/// parse-error signal for the caller.
///
/// Row P is the predictive decision point of the whole grammar. A
/// parenthesized form that *begins with an operator keyword* routes to
/// that operator's dedicated production (5–11), while one that begins
/// with NUMBER / IDENT / `(` routes to the generic application
/// production 12 (`P → E E'`). One token of lookahead settles it; no
/// backtracking is ever needed.
///
/// Row E' terminates the argument-list continuation on `)` (ε) and
/// extends it on anything that can start an expression.
pub fn lookup(nonterminal: NonTerminal, lookahead: TokenKind) -> Option<ProductionId> {
    match (nonterminal, lookahead) {
        // Row S
        (S, Number) | (S, Ident) | (S, LParen) => Some(1),

        // Row E
        (E, Number) => Some(2),
        (E, Ident) => Some(3),
        (E, LParen) => Some(4),

        // Row P
        (P, Number) | (P, Ident) | (P, LParen) => Some(12),
        (P, Plus) => Some(5),
        (P, Minus) => Some(6),
        (P, Mult) => Some(7),
        (P, Equals) => Some(8),
        (P, Cond) => Some(9),
        (P, Lambda) => Some(10),
        (P, Let) => Some(11),

        // Row E'
        (EPrime, Number) | (EPrime, Ident) | (EPrime, LParen) => Some(13),
        (EPrime, RParen) => Some(14),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_lookaheads_pick_dedicated_productions() {
        assert_eq!(lookup(P, Plus), Some(5));
        assert_eq!(lookup(P, Minus), Some(6));
        assert_eq!(lookup(P, Mult), Some(7));
        assert_eq!(lookup(P, Equals), Some(8));
        assert_eq!(lookup(P, Cond), Some(9));
        assert_eq!(lookup(P, Lambda), Some(10));
        assert_eq!(lookup(P, Let), Some(11));
    }

    #[test]
    fn expression_lookaheads_pick_the_application_production() {
        for kind in [Number, Ident, LParen] {
            assert_eq!(lookup(P, kind), Some(12));
        }
    }

    #[test]
    fn continuation_row_terminates_on_rparen_only() {
        assert_eq!(lookup(EPrime, RParen), Some(14));
        for kind in [Number, Ident, LParen] {
            assert_eq!(lookup(EPrime, kind), Some(13));
        }
        // An operator keyword can never continue an argument list.
        assert_eq!(lookup(EPrime, Plus), None);
        assert_eq!(lookup(EPrime, TokenKind::Eof), None);
    }

    #[test]
    fn invalid_pairs_have_no_entry() {
        assert_eq!(lookup(S, RParen), None);
        assert_eq!(lookup(E, Plus), None);
        assert_eq!(lookup(P, RParen), None);
        assert_eq!(lookup(S, TokenKind::Eof), None);
    }

    #[test]
    fn epsilon_production_has_empty_rhs() {
        assert!(rhs(14).is_empty());
        assert_eq!(rhs(9).len(), 4);
        assert_eq!(rhs(11).len(), 4);
    }
}
