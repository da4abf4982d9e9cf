/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      lexer/operators.rs
 * Purpose:   Defines the fixed operator and punctuation glyphs of the
 *            Glyph language, plus the ASCII look-alikes that must be
 *            rejected with a dedicated diagnostic.
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

/// Classifies a character as one of the **fixed single-character operator
/// and punctuation glyphs** of the Glyph language.
///
/// This function is used exclusively by the scanner to recognize operator
/// keywords in a single step, before any literal or identifier scanning
/// is attempted.
///
/// # Parameters
/// - `ch`: The character at the current scan position.
///
/// # Returns
/// - `Some(TokenKind)` if the character is an operator glyph.
/// - `None` if the character should be scanned as something else.
///
/// # Language Rules
/// The operator set is Unicode-exact:
/// ```text
/// +  U+002B  →  Plus
/// −  U+2212  →  Minus    (MINUS SIGN, not the ASCII hyphen)
/// ×  U+00D7  →  Mult     (MULTIPLICATION SIGN, not the letter x)
/// =  U+003D  →  Equals
/// ?  U+003F  →  Cond
/// λ  U+03BB  →  Lambda
/// ≜  U+225C  →  Let
/// (  U+0028  →  LParen
/// )  U+0029  →  RParen
/// ```
pub fn operator_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '\u{002B}' => Some(TokenKind::Plus),
        '\u{2212}' => Some(TokenKind::Minus),
        '\u{00D7}' => Some(TokenKind::Mult),
        '\u{003D}' => Some(TokenKind::Equals),
        '\u{003F}' => Some(TokenKind::Cond),
        '\u{03BB}' => Some(TokenKind::Lambda),
        '\u{225C}' => Some(TokenKind::Let),
        '\u{0028}' => Some(TokenKind::LParen),
        '\u{0029}' => Some(TokenKind::RParen),
        _ => None,
    }
}

/// Determines whether a character is an **ASCII substitute** for one of
/// the required Unicode operator glyphs.
///
/// The two characters a user is most likely to reach for by mistake are
/// the hyphen `-` (instead of `−`) and the letter `x` (instead of `×`).
/// Rejecting these with a dedicated diagnostic, rather than a generic
/// unknown-character error, is a deliberate design choice of the
/// language: the substitutes are never silently accepted.
///
/// The scanner consults this only after the digit and identifier rules
/// have declined the character, so a bare `x` still scans as an
/// identifier and the hyphen is the case that fires in practice.
pub fn is_ascii_substitute(ch: char) -> bool {
    matches!(ch, '-' | 'x')
}
