//! The expression tree produced by the parser.
#[cfg(feature = "serde")]
use serde::Serialize;

use mathml_renderer::attribute::{MathSpacing, MathVariant};

use crate::character_class::Class;

/// A node of the parsed expression, before any presentational decisions are made.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ExpressionNode {
    Row(Vec<ExpressionNode>),
    Identifier {
        text: String,
        variant: Option<MathVariant>,
    },
    Number(String),
    Operator {
        symbol: String,
        class: Class,
        /// `true` for fences, which MathML renderers stretch by default.
        stretchy: bool,
    },
    Subscript {
        base: Box<ExpressionNode>,
        sub: Box<ExpressionNode>,
    },
    Superscript {
        base: Box<ExpressionNode>,
        sup: Box<ExpressionNode>,
    },
    /// Explicit horizontal space, e.g. from `\,`.
    Space(MathSpacing),
}

impl ExpressionNode {
    /// Turn a list of nodes into a single node.
    ///
    /// A single node is returned as is; anything else becomes a row.
    pub(crate) fn from_nodes(mut nodes: Vec<ExpressionNode>) -> ExpressionNode {
        if nodes.len() == 1
            && let Some(single) = nodes.pop()
        {
            single
        } else {
            ExpressionNode::Row(nodes)
        }
    }

    #[inline]
    pub(crate) fn empty() -> ExpressionNode {
        ExpressionNode::Row(Vec::new())
    }

    /// Apply a font variant to all identifiers in this subtree which don't have one yet.
    ///
    /// Because inner wrappers are applied first, the innermost variant wins.
    pub(crate) fn with_variant(self, variant: MathVariant) -> ExpressionNode {
        match self {
            ExpressionNode::Identifier { text, variant: v } => ExpressionNode::Identifier {
                text,
                variant: v.or(Some(variant)),
            },
            ExpressionNode::Row(nodes) => ExpressionNode::Row(
                nodes
                    .into_iter()
                    .map(|node| node.with_variant(variant))
                    .collect(),
            ),
            ExpressionNode::Subscript { base, sub } => ExpressionNode::Subscript {
                base: Box::new(base.with_variant(variant)),
                sub: Box::new(sub.with_variant(variant)),
            },
            ExpressionNode::Superscript { base, sup } => ExpressionNode::Superscript {
                base: Box::new(base.with_variant(variant)),
                sup: Box::new(sup.with_variant(variant)),
            },
            node @ (ExpressionNode::Number(_)
            | ExpressionNode::Operator { .. }
            | ExpressionNode::Space(_)) => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mi(text: &str) -> ExpressionNode {
        ExpressionNode::Identifier {
            text: text.to_string(),
            variant: None,
        }
    }

    #[test]
    fn single_node_is_not_wrapped() {
        assert_eq!(ExpressionNode::from_nodes(vec![mi("x")]), mi("x"));
        assert_eq!(ExpressionNode::from_nodes(Vec::new()), ExpressionNode::empty());
        assert_eq!(
            ExpressionNode::from_nodes(vec![mi("x"), mi("y")]),
            ExpressionNode::Row(vec![mi("x"), mi("y")])
        );
    }

    #[test]
    fn variant_reaches_scripts() {
        let node = ExpressionNode::Superscript {
            base: Box::new(mi("N")),
            sup: Box::new(ExpressionNode::Number("2".to_string())),
        };
        let ExpressionNode::Superscript { base, sup } = node.with_variant(MathVariant::DoubleStruck)
        else {
            panic!("expected a superscript");
        };
        assert_eq!(
            *base,
            ExpressionNode::Identifier {
                text: "N".to_string(),
                variant: Some(MathVariant::DoubleStruck),
            }
        );
        assert_eq!(*sup, ExpressionNode::Number("2".to_string()));
    }

    #[test]
    fn inner_variant_wins() {
        let inner = mi("a").with_variant(MathVariant::Italic);
        let outer = ExpressionNode::Row(vec![inner, mi("b")]).with_variant(MathVariant::Normal);
        assert_eq!(
            outer,
            ExpressionNode::Row(vec![
                ExpressionNode::Identifier {
                    text: "a".to_string(),
                    variant: Some(MathVariant::Italic),
                },
                ExpressionNode::Identifier {
                    text: "b".to_string(),
                    variant: Some(MathVariant::Normal),
                },
            ])
        );
    }
}
