//! Presentational decisions: turning an [`ExpressionNode`] into a [`MathNode`].
use std::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mathml_renderer::{
    ast::MathNode,
    attribute::{MathSpacing, OpAttr},
};

use crate::{character_class::Class, tree::ExpressionNode};

/// How much explicit spacing information is put into the MathML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SpacingMode {
    /// Write TeX's spacing around every operator, so that MathML renderers can't deviate from it.
    #[cfg_attr(feature = "serde", serde(alias = "strict"))]
    Tight,
    /// Only write the attributes which are needed to get TeX-like output.
    #[default]
    Moderate,
    /// Leave as much as possible to the MathML renderer.
    #[cfg_attr(feature = "serde", serde(alias = "relaxed"))]
    Wide,
}

/// Decorate an expression tree with MathML attributes.
///
/// Fences are never stretchy. In [`SpacingMode::Tight`], every operator in a row additionally
/// gets `lspace` and `rspace` attributes.
pub fn decorate(node: &ExpressionNode, mode: SpacingMode) -> MathNode {
    let decorator = Decorator { mode };
    match node {
        ExpressionNode::Row(nodes) => MathNode::Row(decorator.row(nodes, false)),
        // A lone atom at the top level is treated like a row with one element.
        node => {
            let spacing = decorator.row_spacing(std::slice::from_ref(node), false);
            decorator.node(node, spacing.first().copied().flatten(), false)
        }
    }
}

type Spacing = (MathSpacing, MathSpacing);

struct Decorator {
    mode: SpacingMode,
}

impl Decorator {
    /// `spacing` is the space around this node if it is directly in a row.
    fn node(&self, node: &ExpressionNode, spacing: Option<Spacing>, script: bool) -> MathNode {
        match node {
            ExpressionNode::Row(nodes) => MathNode::Row(self.row(nodes, script)),
            ExpressionNode::Identifier { text, variant } => MathNode::Identifier {
                text: text.clone(),
                variant: *variant,
            },
            ExpressionNode::Number(number) => MathNode::Number(number.clone()),
            ExpressionNode::Space(width) => MathNode::Space(*width),
            ExpressionNode::Operator {
                symbol, stretchy, ..
            } => {
                let attr = if *stretchy {
                    OpAttr::non_stretchy()
                } else {
                    OpAttr::default()
                };
                let attr = match spacing {
                    Some((lspace, rspace)) => attr.with_spacing(lspace, rspace),
                    None => attr,
                };
                MathNode::Operator {
                    text: symbol.clone(),
                    attr,
                }
            }
            // The base of a script takes the place of the whole script in the row.
            ExpressionNode::Subscript { base, sub } => MathNode::Subscript {
                target: Box::new(self.node(base, spacing, script)),
                symbol: Box::new(self.node(sub, None, true)),
            },
            ExpressionNode::Superscript { base, sup } => MathNode::Superscript {
                target: Box::new(self.node(base, spacing, script)),
                symbol: Box::new(self.node(sup, None, true)),
            },
        }
    }

    fn row(&self, nodes: &[ExpressionNode], script: bool) -> Vec<MathNode> {
        let spacing = self.row_spacing(nodes, script);
        nodes
            .iter()
            .zip(spacing)
            .map(|(node, spacing)| self.node(node, spacing, script))
            .collect()
    }

    /// Compute the spacing for every element of a row.
    ///
    /// This follows TeX's rules: a binary operator at the start or end of a row, or next to
    /// another operator, becomes an ordinary symbol.
    fn row_spacing(&self, nodes: &[ExpressionNode], script: bool) -> Vec<Option<Spacing>> {
        if !matches!(self.mode, SpacingMode::Tight) || script {
            return vec![None; nodes.len()];
        }
        let mut classes: Vec<Class> = nodes.iter().map(atom_class).collect();
        let mut prev: Option<Class> = None;
        for class in &mut classes {
            if *class == Class::BinaryOp && prev.is_none_or(Class::cancels_following_binary) {
                *class = Class::Default;
            }
            prev = Some(*class);
        }
        // The end of the row counts like a closing fence.
        let cancelled_by_next: Vec<bool> = classes
            .iter()
            .skip(1)
            .map(|next| next.cancels_preceding_binary())
            .chain(iter::once(true))
            .collect();
        for (class, cancelled) in classes.iter_mut().zip(cancelled_by_next) {
            if *class == Class::BinaryOp && cancelled {
                *class = Class::Default;
            }
        }
        classes.into_iter().map(|class| Some(class.spacing())).collect()
    }
}

/// The TeX class of a node when it appears in a row.
fn atom_class(node: &ExpressionNode) -> Class {
    match node {
        ExpressionNode::Operator { class, .. } => *class,
        ExpressionNode::Subscript { base, .. } | ExpressionNode::Superscript { base, .. } => {
            atom_class(base)
        }
        ExpressionNode::Row(_)
        | ExpressionNode::Identifier { .. }
        | ExpressionNode::Number(_)
        | ExpressionNode::Space(_) => Class::Default,
    }
}
