//! MathML tree and serializer used by the `blahtex` crate.
//!
//! This library allows you to construct a tree of presentation MathML elements and then
//! write it to a string.
//!
//! # Example
//!
//! ```rust
//! use blahtex_renderer::ast::MathNode;
//! use blahtex_renderer::attribute::{Encoding, OpAttr};
//!
//! let ast = MathNode::Row(vec![
//!     MathNode::Identifier {
//!         text: "n".to_string(),
//!         variant: None,
//!     },
//!     MathNode::Operator {
//!         text: "=".to_string(),
//!         attr: OpAttr::default(),
//!     },
//!     MathNode::Number("1".to_string()),
//! ]);
//!
//! let mut output = String::new();
//! ast.emit(&mut output, 0, Encoding::Numeric).unwrap();
//! assert_eq!(output, "<mrow><mi>n</mi><mo>=</mo><mn>1</mn></mrow>");
//! ```
pub mod ast;
pub mod attribute;
pub mod fmt;
