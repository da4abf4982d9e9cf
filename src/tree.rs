/*
 * ==========================================================================
 * GLYPH - The Unicode Expression Language
 * ==========================================================================
 *
 * File:      tree.rs
 * Purpose:   The parse-tree value type produced by the Glyph predictive
 *            parser, plus its display and JSON renderings.
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

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// The label of an interior parse-tree node.
///
/// Arity per the grammar: the four operators are binary, COND is
/// ternary, LAMBDA is (parameter, body), LET is (name, value, body),
/// and APPLY is variable-arity (function plus its arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLabel {
    Plus,
    Minus,
    Mult,
    Equals,
    Cond,
    Lambda,
    Let,
    Apply,
}

impl NodeLabel {
    /// The label's display name, matching the first element of the
    /// node's serialized form.
    pub fn name(self) -> &'static str {
        match self {
            NodeLabel::Plus => "PLUS",
            NodeLabel::Minus => "MINUS",
            NodeLabel::Mult => "MULT",
            NodeLabel::Equals => "EQUALS",
            NodeLabel::Cond => "COND",
            NodeLabel::Lambda => "LAMBDA",
            NodeLabel::Let => "LET",
            NodeLabel::Apply => "APPLY",
        }
    }
}

/// A Glyph parse tree.
///
/// A pure value type: no back-references, no sharing. Each successful
/// parse produces one freshly owned tree, built bottom-up during the
/// table-driven derivation and returned whole.
///
/// # Shape
/// Leaves are integer literals and identifiers; interior nodes are a
/// `NodeLabel` with a child list in original left-to-right source order.
/// The E' continuation list the parser uses internally is collapsed into
/// the parent APPLY node before a tree is ever returned, so it has no
/// variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTree {
    Number(i64),
    Ident(String),
    Node {
        label: NodeLabel,
        children: Vec<ParseTree>,
    },
}

impl ParseTree {
    pub fn node(label: NodeLabel, children: Vec<ParseTree>) -> Self {
        ParseTree::Node { label, children }
    }
}

impl Serialize for ParseTree {
    /// Serializes to the language's canonical JSON rendering:
    ///
    /// ```text
    /// 42                    →  42
    /// x                     →  "x"
    /// (+ (× 2 3) 4)         →  ["PLUS", ["MULT", 2, 3], 4]
    /// ```
    ///
    /// Interior nodes become arrays with the label first and the
    /// children after it, nested recursively.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseTree::Number(n) => serializer.serialize_i64(*n),
            ParseTree::Ident(name) => serializer.serialize_str(name),
            ParseTree::Node { label, children } => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(label.name())?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

impl fmt::Display for ParseTree {
    /// Renders the same bracketed shape as the JSON form, for console
    /// output: `[PLUS, [MULT, 2, 3], 4]`, with identifiers quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTree::Number(n) => write!(f, "{}", n),
            ParseTree::Ident(name) => write!(f, "\"{}\"", name),
            ParseTree::Node { label, children } => {
                write!(f, "[{}", label.name())?;
                for child in children {
                    write!(f, ", {}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaves_serialize_as_bare_values() {
        assert_eq!(serde_json::to_value(ParseTree::Number(42)).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(ParseTree::Ident("x".into())).unwrap(),
            json!("x")
        );
    }

    #[test]
    fn nodes_serialize_label_first() {
        let tree = ParseTree::node(
            NodeLabel::Plus,
            vec![
                ParseTree::node(
                    NodeLabel::Mult,
                    vec![ParseTree::Number(2), ParseTree::Number(3)],
                ),
                ParseTree::Number(4),
            ],
        );
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!(["PLUS", ["MULT", 2, 3], 4])
        );
    }

    #[test]
    fn display_matches_the_bracketed_shape() {
        let tree = ParseTree::node(
            NodeLabel::Lambda,
            vec![ParseTree::Ident("x".into()), ParseTree::Ident("x".into())],
        );
        assert_eq!(tree.to_string(), "[LAMBDA, \"x\", \"x\"]");
    }
}
