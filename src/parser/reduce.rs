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

use crate::grammar::ProductionId;
use crate::parser::parser::{Parser, StackValue};
use crate::tree::{NodeLabel, ParseTree};

impl Parser {
    /// Applies the reduction for one production against the value stack.
    ///
    /// Each reduction pops a fixed number of values and pushes exactly
    /// one back, preserving left-to-right child order. The reduce marker
    /// was pushed beneath the production's right-hand side, so by the
    /// time this runs every right-hand-side symbol has been matched and
    /// its value is on the stack, second operand above the first.
    ///
    /// Productions 1–4 are pass-throughs: the matched value is already
    /// in place.
    pub(crate) fn reduce(&mut self, id: ProductionId) {
        match id {
            // 1: S → E, 2: E → NUMBER, 3: E → IDENT, 4: E → ( P )
            1 | 2 | 3 | 4 => {}

            // 5–8: P → op E E
            5 => self.reduce_binary(NodeLabel::Plus),
            6 => self.reduce_binary(NodeLabel::Minus),
            7 => self.reduce_binary(NodeLabel::Mult),
            8 => self.reduce_binary(NodeLabel::Equals),

            // 9: P → ? E E E
            9 => {
                let third = self.pop_tree();
                let second = self.pop_tree();
                let first = self.pop_tree();
                self.push_tree(ParseTree::node(
                    NodeLabel::Cond,
                    vec![first, second, third],
                ));
            }

            // 10: P → λ IDENT E
            10 => {
                let body = self.pop_tree();
                let param = self.pop_tree();
                self.push_tree(ParseTree::node(NodeLabel::Lambda, vec![param, body]));
            }

            // 11: P → ≜ IDENT E E
            11 => {
                let body = self.pop_tree();
                let value = self.pop_tree();
                let name = self.pop_tree();
                self.push_tree(ParseTree::node(NodeLabel::Let, vec![name, value, body]));
            }

            // 12: P → E E'. An empty continuation means a bare
            // parenthesized expression: the leading value passes through
            // unchanged. Otherwise the leading value becomes the function
            // of an APPLY node and the continuation list its arguments.
            12 => {
                let trailing = self.pop_list();
                let leading = self.pop_tree();
                if trailing.is_empty() {
                    self.push_tree(leading);
                } else {
                    let mut children = vec![leading];
                    children.extend(trailing);
                    self.push_tree(ParseTree::node(NodeLabel::Apply, children));
                }
            }

            // 13: E' → E E'
            13 => {
                let tail = self.pop_list();
                let head = self.pop_tree();
                let mut list = vec![head];
                list.extend(tail);
                self.values.push(StackValue::List(list));
            }

            // 14: E' → ε
            _ => self.values.push(StackValue::List(Vec::new())),
        }
    }

    fn reduce_binary(&mut self, label: NodeLabel) {
        let second = self.pop_tree();
        let first = self.pop_tree();
        self.push_tree(ParseTree::node(label, vec![first, second]));
    }

    fn push_tree(&mut self, tree: ParseTree) {
        self.values.push(StackValue::Tree(tree));
    }

    /// Pops a completed subtree. The derivation discipline guarantees
    /// the value is there and is a tree, not an E' list.
    fn pop_tree(&mut self) -> ParseTree {
        match self.values.pop() {
            Some(StackValue::Tree(tree)) => tree,
            _ => unreachable!("reduction popped a tree the derivation did not produce"),
        }
    }

    /// Pops an E' continuation list.
    fn pop_list(&mut self) -> Vec<ParseTree> {
        match self.values.pop() {
            Some(StackValue::List(list)) => list,
            _ => unreachable!("reduction popped a list the derivation did not produce"),
        }
    }
}
