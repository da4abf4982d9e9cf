/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the fundamental lexical token types used by the Glyph
 *            front end during the scanning and parsing stages.
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

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in the Glyph language.
///
/// `TokenKind` is deliberately fieldless: the predictive parser compares
/// terminals against the lookahead by kind alone, independent of any
/// payload, and the parsing table is keyed on `(NonTerminal, TokenKind)`.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Predictive Parser → Parse Tree
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal: a maximal run of ASCII digits.
    ///
    /// There is no negative-literal form; `−` is a prefix operator
    /// token, never a sign.
    Number,

    /// A user-defined name: an ASCII letter followed by any run of
    /// ASCII letters and digits.
    Ident,

    /// `+` (U+002B) — addition operator keyword.
    Plus,

    /// `−` (U+2212, MINUS SIGN) — subtraction operator keyword.
    ///
    /// The ASCII hyphen `-` is **not** this token; the scanner rejects
    /// it outright as a disallowed substitute.
    Minus,

    /// `×` (U+00D7, MULTIPLICATION SIGN) — multiplication operator
    /// keyword. The ASCII letter `x` is likewise rejected, never
    /// silently accepted.
    Mult,

    /// `=` (U+003D) — equality operator keyword.
    Equals,

    /// `?` (U+003F) — conditional keyword, heading a ternary form.
    Cond,

    /// `λ` (U+03BB) — lambda abstraction keyword.
    Lambda,

    /// `≜` (U+225C) — let-binding keyword.
    Let,

    /// `(` — opens a parenthesized form.
    LParen,

    /// `)` — closes a parenthesized form.
    RParen,

    /// End-of-input marker.
    ///
    /// Appended exactly once as the **final token** during scanning and
    /// used by the parser to decide when input has been fully consumed.
    Eof,
}

impl TokenKind {
    /// The canonical display name of this kind, as it appears in
    /// syntax-error messages (`PLUS`, `LPAREN`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Equals => "EQUALS",
            TokenKind::Cond => "COND",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::Let => "LET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The semantic payload carried by NUMBER and IDENT tokens.
///
/// All other token kinds carry no payload; the kind itself is the whole
/// story.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// The parsed value of a digit run. Always non-negative.
    Number(i64),

    /// The matched identifier text, verbatim.
    Ident(String),
}

/// Represents a **single lexical token** produced by the Glyph scanner.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - An optional payload (`TokenValue`), present only for NUMBER / IDENT
/// - A source location for error reporting
///
/// # Example Tokens
/// ```text
/// 42  →  { kind: Number, value: Some(Number(42)), span: 1:0 }
/// λ   →  { kind: Lambda, value: None,             span: 1:0 }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The payload, for NUMBER and IDENT tokens only.
    pub value: Option<TokenValue>,

    /// Where in the source this token begins.
    pub span: Span,
}

impl Token {
    /// A payload-free token (operators, parentheses, EOF).
    pub fn bare(kind: TokenKind, span: Span) -> Self {
        Self { kind, value: None, span }
    }

    /// A NUMBER token carrying its parsed value.
    pub fn number(value: i64, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(TokenValue::Number(value)),
            span,
        }
    }

    /// An IDENT token carrying its matched text.
    pub fn ident(name: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Ident,
            value: Some(TokenValue::Ident(name.into())),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing error output**.
    ///
    /// NUMBER and IDENT show their payload (`NUMBER(42)`, `IDENT(abc)`);
    /// every other kind shows its bare name (`PLUS`, `RPAREN`, `EOF`).
    ///
    /// In error output, users care about *what they wrote*:
    /// ```text
    /// expected RPAREN but saw NUMBER(4)
    /// ```
    /// not the full internal structure of the token. `Debug` remains
    /// available for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(TokenValue::Number(n)) => write!(f, "NUMBER({})", n),
            Some(TokenValue::Ident(name)) => write!(f, "IDENT({})", name),
            None => write!(f, "{}", self.kind.name()),
        }
    }
}
