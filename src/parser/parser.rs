/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * Core Table-Driven Predictive Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver function used to transform a token stream into a
 * Glyph parse tree.
 *
 * The parsing implementation is split across two modules:
 * - `parser.rs`  → The LL(1) stack machine: symbol stack, value stack,
 *                  lookahead handling, and error raising
 * - `reduce.rs`  → The per-production reductions that build tree nodes
 *                  on the value stack
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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
use crate::grammar::{self, NonTerminal, ProductionId, Symbol};
use crate::lexer::token::{Token, TokenKind, TokenValue};
use crate::span::Span;
use crate::tree::ParseTree;

/// An item on the parser's symbol/continuation stack.
///
/// Grammar symbols and deferred-reduction markers interleave on the same
/// stack: when a nonterminal is expanded, its `Reduce` marker is pushed
/// *under* the right-hand-side symbols, so it surfaces exactly when all
/// of them have been matched and their values sit on the value stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackItem {
    /// A terminal or nonterminal still to be matched/expanded.
    Symbol(Symbol),

    /// The bottom-of-stack end marker; matched last, against EOF.
    EndMarker,

    /// A deferred reduction for the given production. Applying it never
    /// consumes input.
    Reduce(ProductionId),
}

/// A value on the parser's value stack.
///
/// `List` is the transient E' continuation (zero or more trailing
/// argument expressions). It exists only between reductions 13/14 and
/// reduction 12, which collapses it into an APPLY node's child list; it
/// is never part of a returned tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue {
    Tree(ParseTree),
    List(Vec<ParseTree>),
}

/// The core Glyph predictive parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The symbol/continuation stack driving the leftmost derivation
/// - The value stack accumulating scanned literals and reduced subtrees
///
/// One parse invocation is a self-contained, single-threaded
/// computation over its own stacks and cursor; only the static grammar
/// table is shared, and it is never mutated.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    pub(crate) symbols: Vec<StackItem>,
    pub(crate) values: Vec<StackValue>,
}

/// Public entry point for the Glyph parsing phase.
///
/// This function:
/// 1. Creates a new `Parser` instance from the provided token list
/// 2. Runs the table-driven stack machine to completion
/// 3. Returns the finished parse tree, or the first error
///
/// # Parameters
/// - `tokens`: The full token stream produced by the lexer, terminated
///   by its single EOF token
///
/// # Glyph Front-End Pipeline
/// ```text
/// Source → Lexer → Tokens → Predictive Parser → Parse Tree
/// ```
///
/// # Errors
/// The first structural or table-lookup failure aborts immediately with
/// a descriptive `GlyphError`; no partial tree is returned and no
/// recovery is attempted. Tokens are normally produced by `tokenize`;
/// a hand-built NUMBER or IDENT token missing its payload is treated as
/// a terminal mismatch rather than accepted.
pub fn parse(tokens: Vec<Token>) -> Result<ParseTree, GlyphError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

impl Parser {
    /// Creates a parser with the end marker at the bottom of the symbol
    /// stack and the start symbol on top, pushed in that order so the
    /// end marker is matched last.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            symbols: vec![
                StackItem::EndMarker,
                StackItem::Symbol(Symbol::NonTerminal(NonTerminal::S)),
            ],
            values: Vec::new(),
        }
    }

    /// Runs the stack machine to completion.
    ///
    /// Each iteration pops the top of the symbol stack and inspects the
    /// current lookahead token:
    ///
    /// - **Reduce marker** → apply that production's reduction against
    ///   the value stack; consumes no input.
    /// - **End marker** → success iff the lookahead is EOF, in which
    ///   case the sole remaining value is the final tree; otherwise
    ///   "unexpected trailing input".
    /// - **Terminal** → must equal the lookahead ("terminal mismatch"
    ///   otherwise); NUMBER/IDENT push their payload; cursor advances.
    /// - **Nonterminal** → parsing-table lookup ("no table entry" on
    ///   absence); push the reduce marker, then the right-hand side in
    ///   reverse so the leftmost symbol is processed next.
    pub fn parse(&mut self) -> Result<ParseTree, GlyphError> {
        while let Some(top) = self.symbols.pop() {
            match top {
                StackItem::Reduce(id) => self.reduce(id),

                StackItem::EndMarker => {
                    if self.lookahead_kind() != TokenKind::Eof {
                        return Err(GlyphError::trailing_input(
                            self.render_lookahead(),
                            self.lookahead_span(),
                        ));
                    }
                    return match self.values.pop() {
                        Some(StackValue::Tree(tree)) if self.values.is_empty() => Ok(tree),
                        _ => unreachable!(
                            "a successful derivation leaves exactly one tree on the value stack"
                        ),
                    };
                }

                StackItem::Symbol(Symbol::Terminal(expected)) => {
                    self.match_terminal(expected)?;
                }

                StackItem::Symbol(Symbol::NonTerminal(nonterminal)) => {
                    self.predict(nonterminal)?;
                }
            }
        }

        unreachable!("the end marker sits at the bottom of the symbol stack")
    }

    /// Matches an expected terminal against the lookahead token.
    ///
    /// On a NUMBER or IDENT match, the token's payload is pushed onto
    /// the value stack as a leaf before the cursor advances; the
    /// reductions find it there later.
    fn match_terminal(&mut self, expected: TokenKind) -> Result<(), GlyphError> {
        if self.lookahead_kind() != expected {
            return Err(GlyphError::terminal_mismatch(
                expected,
                self.render_lookahead(),
                self.lookahead_span(),
            ));
        }

        if let Some(token) = self.tokens.get(self.current) {
            match &token.value {
                Some(TokenValue::Number(n)) => {
                    self.values.push(StackValue::Tree(ParseTree::Number(*n)));
                }
                Some(TokenValue::Ident(name)) => {
                    self.values
                        .push(StackValue::Tree(ParseTree::Ident(name.clone())));
                }
                // The scanner always attaches a payload to NUMBER and
                // IDENT; a hand-built token without one is malformed and
                // is refused here, before a reduction goes looking for a
                // value that was never pushed.
                None if matches!(expected, TokenKind::Number | TokenKind::Ident) => {
                    return Err(GlyphError::terminal_mismatch(
                        expected,
                        self.render_lookahead(),
                        self.lookahead_span(),
                    ));
                }
                None => {}
            }
        }

        self.current += 1;
        Ok(())
    }

    /// Expands a nonterminal via the parsing table.
    ///
    /// The reduce marker is pushed *under* the right-hand-side symbols
    /// (first), and the symbols in reverse order (after), so that the
    /// leftmost symbol is processed next and the marker surfaces once
    /// the whole right-hand side has been matched.
    fn predict(&mut self, nonterminal: NonTerminal) -> Result<(), GlyphError> {
        let lookahead = self.lookahead_kind();

        let id = grammar::lookup(nonterminal, lookahead).ok_or_else(|| {
            GlyphError::no_table_entry(
                nonterminal,
                self.render_lookahead(),
                self.lookahead_span(),
            )
        })?;

        self.symbols.push(StackItem::Reduce(id));
        for symbol in grammar::rhs(id).iter().rev() {
            self.symbols.push(StackItem::Symbol(*symbol));
        }

        Ok(())
    }

    /// The kind of the token at the cursor, or EOF past the end.
    fn lookahead_kind(&self) -> TokenKind {
        self.tokens
            .get(self.current)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// The error-message rendering of the lookahead (`IDENT(name)`,
    /// `NUMBER(value)`, or the bare terminal name).
    fn render_lookahead(&self) -> String {
        self.tokens
            .get(self.current)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "EOF".to_string())
    }

    /// The span of the lookahead, falling back to the last token's span
    /// when the cursor is past the end.
    fn lookahead_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ParseErrorKind};
    use crate::lexer::tokenize;
    use crate::tree::NodeLabel;

    fn parse_source(source: &str) -> Result<ParseTree, GlyphError> {
        parse(tokenize(source).expect("test source must scan"))
    }

    fn ident(name: &str) -> ParseTree {
        ParseTree::Ident(name.into())
    }

    #[test]
    fn atoms_parse_to_leaves() {
        assert_eq!(parse_source("42").unwrap(), ParseTree::Number(42));
        assert_eq!(parse_source("x").unwrap(), ident("x"));
    }

    #[test]
    fn binary_operators_build_binary_nodes() {
        assert_eq!(
            parse_source("(+ 2 3)").unwrap(),
            ParseTree::node(
                NodeLabel::Plus,
                vec![ParseTree::Number(2), ParseTree::Number(3)]
            )
        );
        assert_eq!(
            parse_source("(× x 5)").unwrap(),
            ParseTree::node(NodeLabel::Mult, vec![ident("x"), ParseTree::Number(5)])
        );
        assert_eq!(
            parse_source("(− 9 4)").unwrap(),
            ParseTree::node(
                NodeLabel::Minus,
                vec![ParseTree::Number(9), ParseTree::Number(4)]
            )
        );
    }

    #[test]
    fn children_keep_left_to_right_source_order() {
        assert_eq!(
            parse_source("(+ (× 2 3) 4)").unwrap(),
            ParseTree::node(
                NodeLabel::Plus,
                vec![
                    ParseTree::node(
                        NodeLabel::Mult,
                        vec![ParseTree::Number(2), ParseTree::Number(3)]
                    ),
                    ParseTree::Number(4),
                ]
            )
        );
    }

    #[test]
    fn cond_builds_a_ternary_node() {
        assert_eq!(
            parse_source("(? (= x 0) 1 0)").unwrap(),
            ParseTree::node(
                NodeLabel::Cond,
                vec![
                    ParseTree::node(
                        NodeLabel::Equals,
                        vec![ident("x"), ParseTree::Number(0)]
                    ),
                    ParseTree::Number(1),
                    ParseTree::Number(0),
                ]
            )
        );
    }

    #[test]
    fn lambda_and_let_bind_identifiers() {
        assert_eq!(
            parse_source("(λ x x)").unwrap(),
            ParseTree::node(NodeLabel::Lambda, vec![ident("x"), ident("x")])
        );
        assert_eq!(
            parse_source("(≜ y 10 y)").unwrap(),
            ParseTree::node(
                NodeLabel::Let,
                vec![ident("y"), ParseTree::Number(10), ident("y")]
            )
        );
    }

    #[test]
    fn application_collects_all_arguments() {
        assert_eq!(
            parse_source("((λ x (+ x 1)) 5)").unwrap(),
            ParseTree::node(
                NodeLabel::Apply,
                vec![
                    ParseTree::node(
                        NodeLabel::Lambda,
                        vec![
                            ident("x"),
                            ParseTree::node(
                                NodeLabel::Plus,
                                vec![ident("x"), ParseTree::Number(1)]
                            ),
                        ]
                    ),
                    ParseTree::Number(5),
                ]
            )
        );

        // Variable arity: function plus three arguments.
        assert_eq!(
            parse_source("(f 1 2 3)").unwrap(),
            ParseTree::node(
                NodeLabel::Apply,
                vec![
                    ident("f"),
                    ParseTree::Number(1),
                    ParseTree::Number(2),
                    ParseTree::Number(3),
                ]
            )
        );
    }

    #[test]
    fn lone_parenthesized_expression_collapses() {
        // (x) is plain x, not an application: the empty E' continuation
        // leaves the leading value untouched.
        assert_eq!(parse_source("(x)").unwrap(), ident("x"));
        assert_eq!(parse_source("((+ 1 2))").unwrap(), parse_source("(+ 1 2)").unwrap());
    }

    #[test]
    fn missing_rparen_fails_at_eof() {
        let err = parse_source("(+ 2").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Parse(_)));
        assert!(err.message.contains("EOF"));
    }

    #[test]
    fn unmatched_rparen_fails_on_the_first_step() {
        let err = parse_source(")").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Parse(ParseErrorKind::NoTableEntry)
        ));
        assert!(err.message.contains("RPAREN"));
    }

    #[test]
    fn extra_operator_argument_violates_fixed_arity() {
        // (+ 2 3 4): after + E E the parser expects ) but sees NUMBER(4).
        let err = parse_source("(+ 2 3 4)").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Parse(ParseErrorKind::TerminalMismatch)
        ));
        assert!(err.message.contains("NUMBER(4)"));
    }

    #[test]
    fn trailing_input_after_a_complete_form_fails() {
        let err = parse_source("42 43").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Parse(ParseErrorKind::TrailingInput)
        ));
        assert!(err.message.contains("NUMBER(43)"));
    }

    #[test]
    fn payload_less_number_and_ident_tokens_are_refused() {
        // A NUMBER or IDENT without its payload cannot come from the
        // scanner, but `parse` is public and such tokens are
        // constructible. They must fail as a mismatch, not panic a
        // later reduction.
        let span = Span::default();
        for kind in [TokenKind::Number, TokenKind::Ident] {
            let tokens = vec![
                Token::bare(TokenKind::LParen, span),
                Token::bare(TokenKind::Plus, span),
                Token::bare(kind, span),
                Token::bare(kind, span),
                Token::bare(TokenKind::RParen, span),
                Token::bare(TokenKind::Eof, span),
            ];
            let err = parse(tokens).unwrap_err();
            assert!(matches!(
                err.kind,
                ErrorKind::Parse(ParseErrorKind::TerminalMismatch)
            ));
        }
    }

    #[test]
    fn parsing_is_deterministic_across_repetitions() {
        let first = parse_source("(? (= x 0) 1 0)").unwrap();
        let second = parse_source("(? (= x 0) 1 0)").unwrap();
        assert_eq!(first, second);
    }
}
