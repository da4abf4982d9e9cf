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
use crate::lexer::operators::{is_ascii_substitute, operator_kind};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new Glyph lexer instance from raw source code.
    ///
    /// This initializes the internal scanning state and prepares the
    /// lexer to convert source text into a stream of lexical tokens.
    ///
    /// # Parameters
    /// - `source`: A UTF-8 encoded Glyph source string.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`, column counter to `0`
    /// - Empty token output buffer
    ///
    /// # Compiler Stage
    /// This is the **entry point for lexical analysis** in the Glyph
    /// front-end pipeline. The scanner works on characters, not bytes:
    /// the operator glyphs are specific Unicode code points.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// This method repeatedly scans individual tokens until the end of
    /// the source is reached, then appends a final `Eof` token.
    ///
    /// # Behavior
    /// - Skips whitespace (Unicode-aware)
    /// - Emits structured `Token` objects
    /// - Guarantees a terminating `TokenKind::Eof` marker, appended
    ///   exactly once
    /// - **Rejects** unscannable input: the scan is hardened, and the
    ///   first bad character aborts with a `GlyphError`
    ///
    /// # Errors
    /// - `E_SCAN_OPERATOR` for the ASCII look-alikes `-` and `x`
    /// - `E_SCAN_CHAR` for any other unrecognized character
    /// - `E_SCAN_NUMBER` for a digit run that overflows the NUMBER
    ///   payload
    pub fn scan_tokens(&mut self) -> Result<(), GlyphError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::bare(
            TokenKind::Eof,
            Span::new(self.line, self.column),
        ));

        Ok(())
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// This method:
    /// - Advances the character cursor by one
    /// - Classifies the character
    /// - Routes to specialized scanners for numbers and identifiers
    ///
    /// # Behavior
    /// - Operator glyphs are recognized in a single step via
    ///   `operator_kind`
    /// - Numbers are maximal ASCII digit runs
    /// - Identifiers start with an ASCII letter and continue with
    ///   letters or digits
    /// - Updates line/column counters automatically
    fn scan_token(&mut self) -> Result<(), GlyphError> {
        let span = Span::new(self.line, self.column);
        let ch = self.advance();

        // Whitespace (Unicode-aware, no token emitted)
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
            return Ok(());
        }
        if ch.is_whitespace() {
            return Ok(());
        }

        // Fixed single-character operator / punctuation glyphs
        if let Some(kind) = operator_kind(ch) {
            self.tokens.push(Token::bare(kind, span));
            return Ok(());
        }

        // Numbers
        if ch.is_ascii_digit() {
            return self.number(span);
        }

        // Identifiers
        if ch.is_ascii_alphabetic() {
            self.identifier(span);
            return Ok(());
        }

        // Everything else is unscannable. The ASCII substitutes for the
        // Unicode minus / multiply glyphs get their own diagnostic.
        if is_ascii_substitute(ch) {
            return Err(GlyphError::substitute_operator(ch, span));
        }

        Err(GlyphError::unknown_character(ch, span))
    }

    /// Scans an integer numeric literal.
    ///
    /// # Behavior
    /// - Consumes a maximal run of consecutive ASCII digits
    /// - Emits a `TokenKind::Number` token carrying the parsed value
    ///
    /// # Language Rules
    /// - Literals are non-negative; there is no sign character in the
    ///   grammar (`−` is an operator keyword)
    /// - No floating-point or radix notation
    ///
    /// # Errors
    /// - `E_SCAN_NUMBER` if the run does not fit the `i64` payload
    fn number(&mut self, span: Span) -> Result<(), GlyphError> {
        let start = self.current - 1;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();

        // The payload must equal the digit run exactly; a run that
        // overflows i64 is a scan error, not a saturated value.
        let value: i64 = text
            .parse()
            .map_err(|_| GlyphError::number_out_of_range(&text, span))?;

        self.tokens.push(Token::number(value, span));
        Ok(())
    }

    /// Scans an identifier token.
    ///
    /// # Behavior
    /// - Reads all following ASCII letters and digits
    /// - Emits a `TokenKind::Ident` token carrying the matched text
    ///
    /// # Language Rules
    /// - Identifiers must start with an ASCII letter
    /// - Digits are allowed after the first character (`x1`, `row2col3`)
    /// - There are no reserved words: the operator keywords are glyphs,
    ///   never letters
    fn identifier(&mut self, span: Span) {
        let start = self.current - 1;

        while self.peek().is_ascii_alphanumeric() {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();

        self.tokens.push(Token::ident(text, span));
    }

    /// Advances the lexer cursor by one character.
    ///
    /// # Returns
    /// The character that was consumed.
    ///
    /// # Safety
    /// Caller must ensure EOF has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        ch
    }

    /// Returns the current character without consuming it.
    ///
    /// # Returns
    /// - The current character
    /// - `'\0'` if the end of input has been reached
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Determines whether the lexer has reached the end of input.
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Public entry point for the Glyph scanning phase.
///
/// Converts raw source text into the ordered token sequence consumed by
/// the predictive parser. The returned sequence always ends with exactly
/// one `Eof` token; empty input yields `[EOF]` alone.
///
/// # Errors
/// The scan is total over the valid alphabet but **hardened** against
/// everything else: the first unscannable character aborts the scan with
/// a descriptive `GlyphError` (see `scan_token`).
///
/// # Example
/// ```rust
/// use glyph::lexer::tokenize;
/// let tokens = tokenize("(+ 2 3)").unwrap();
/// assert_eq!(tokens.len(), 6); // ( + 2 3 ) EOF
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, GlyphError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::error::ScanErrorKind;
    use crate::lexer::token::TokenValue;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("  \t\n  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn scans_all_operator_glyphs() {
        assert_eq!(
            kinds("+ − × = ? λ ≜ ( )"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mult,
                TokenKind::Equals,
                TokenKind::Cond,
                TokenKind::Lambda,
                TokenKind::Let,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_numbers_maximally() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens[0].value, Some(TokenValue::Number(42)));
        assert_eq!(tokens[1].kind, TokenKind::Eof);

        // A digit run followed by letters splits into NUMBER then IDENT.
        let tokens = tokenize("42y").unwrap();
        assert_eq!(tokens[0].value, Some(TokenValue::Number(42)));
        assert_eq!(tokens[1].value, Some(TokenValue::Ident("y".into())));
    }

    #[test]
    fn overlong_digit_runs_are_rejected_not_saturated() {
        // 20 digits: past i64::MAX. The payload must equal the digit
        // run, so this is a scan error rather than a clamped value.
        let err = tokenize("99999999999999999999").unwrap_err();
        assert_eq!(err.code, "E_SCAN_NUMBER");
        assert!(matches!(
            err.kind,
            ErrorKind::Scan(ScanErrorKind::NumberOutOfRange)
        ));

        // The largest representable literal still scans, with its
        // payload equal to the digits.
        let tokens = tokenize("9223372036854775807").unwrap();
        assert_eq!(tokens[0].value, Some(TokenValue::Number(i64::MAX)));
        assert_eq!(tokens[0].to_string(), "NUMBER(9223372036854775807)");
    }

    #[test]
    fn scans_identifiers_with_trailing_digits() {
        let tokens = tokenize("row2col3").unwrap();
        assert_eq!(
            tokens[0].value,
            Some(TokenValue::Ident("row2col3".into()))
        );
    }

    #[test]
    fn bare_x_is_an_identifier_not_an_error() {
        let tokens = tokenize("x").unwrap();
        assert_eq!(tokens[0].value, Some(TokenValue::Ident("x".into())));
    }

    #[test]
    fn ascii_hyphen_is_rejected_as_substitute() {
        let err = tokenize("(- 1 2)").unwrap_err();
        assert_eq!(err.code, "E_SCAN_OPERATOR");
        assert!(matches!(
            err.kind,
            ErrorKind::Scan(ScanErrorKind::SubstituteOperator)
        ));
    }

    #[test]
    fn unknown_character_is_rejected() {
        let err = tokenize("(+ 1 #)").unwrap_err();
        assert_eq!(err.code, "E_SCAN_CHAR");
        assert!(matches!(
            err.kind,
            ErrorKind::Scan(ScanErrorKind::UnknownCharacter)
        ));
    }

    #[test]
    fn spans_track_line_and_column() {
        let tokens = tokenize("(+ 2\n 3)").unwrap();
        let three = &tokens[3];
        assert_eq!(three.value, Some(TokenValue::Number(3)));
        assert_eq!(three.span.line, 2);
        assert_eq!(three.span.column, 1);
    }

    #[test]
    fn exactly_one_eof_terminates_the_stream() {
        let tokens = tokenize("(λ x x)").unwrap();
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
