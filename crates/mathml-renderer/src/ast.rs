use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::attribute::{Encoding, MathSpacing, MathVariant, OpAttr};
use crate::fmt::{escape_xml_content, new_line_and_indent};

/// A presentation MathML element, with all attributes decided.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MathNode {
    Row(Vec<MathNode>),
    Identifier {
        text: String,
        variant: Option<MathVariant>,
    },
    Number(String),
    Operator {
        text: String,
        attr: OpAttr,
    },
    Subscript {
        target: Box<MathNode>,
        symbol: Box<MathNode>,
    },
    Superscript {
        target: Box<MathNode>,
        symbol: Box<MathNode>,
    },
    Space(MathSpacing),
}

macro_rules! writeln_indent {
    ($buf:expr, $indent:expr, $($tail:tt)+) => {
        new_line_and_indent($buf, $indent);
        write!($buf, $($tail)+)?
    };
}

impl MathNode {
    /// Write this node as MathML to `s`.
    ///
    /// A `base_indent` of zero disables pretty-printing. Otherwise, every element starts on a new
    /// line, indented by `base_indent` levels.
    pub fn emit(&self, s: &mut String, base_indent: usize, encoding: Encoding) -> std::fmt::Result {
        // Compute the indent for the children of the node.
        let child_indent = if base_indent > 0 {
            base_indent.saturating_add(1)
        } else {
            0
        };

        // Get the base indent out of the way.
        new_line_and_indent(s, base_indent);

        match self {
            MathNode::Row(nodes) => {
                write!(s, "<mrow>")?;
                for node in nodes {
                    node.emit(s, child_indent, encoding)?;
                }
                if !nodes.is_empty() {
                    new_line_and_indent(s, base_indent);
                }
                write!(s, "</mrow>")?;
            }
            MathNode::Identifier { text, variant } => {
                match variant {
                    Some(variant) => write!(s, "<mi mathvariant=\"{}\">", <&str>::from(variant))?,
                    None => write!(s, "<mi>")?,
                }
                escape_xml_content(s, text, encoding);
                write!(s, "</mi>")?;
            }
            MathNode::Number(number) => {
                write!(s, "<mn>")?;
                escape_xml_content(s, number, encoding);
                write!(s, "</mn>")?;
            }
            MathNode::Operator { text, attr } => {
                write!(s, "<mo")?;
                if let Some(stretchy) = attr.stretchy {
                    write!(s, " stretchy=\"{stretchy}\"")?;
                }
                if let Some(lspace) = attr.lspace {
                    write!(s, " lspace=\"{}\"", <&str>::from(lspace))?;
                }
                if let Some(rspace) = attr.rspace {
                    write!(s, " rspace=\"{}\"", <&str>::from(rspace))?;
                }
                write!(s, ">")?;
                escape_xml_content(s, text, encoding);
                write!(s, "</mo>")?;
            }
            MathNode::Subscript { target, symbol } => {
                write!(s, "<msub>")?;
                target.emit(s, child_indent, encoding)?;
                symbol.emit(s, child_indent, encoding)?;
                writeln_indent!(s, base_indent, "</msub>");
            }
            MathNode::Superscript { target, symbol } => {
                write!(s, "<msup>")?;
                target.emit(s, child_indent, encoding)?;
                symbol.emit(s, child_indent, encoding)?;
                writeln_indent!(s, base_indent, "</msup>");
            }
            MathNode::Space(width) => {
                write!(s, "<mspace width=\"{}\"/>", <&str>::from(width))?;
            }
        }
        Ok(())
    }

    /// Render this node into a fresh string without pretty-printing.
    pub fn render(&self, encoding: Encoding) -> String {
        let mut output = String::new();
        // Writing to a `String` never fails.
        let _ = self.emit(&mut output, 0, encoding);
        output
    }
}
