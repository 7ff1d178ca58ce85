//! Convert LaTeX math to MathML, in the document format of blahtex.
//!
//! # Usage
//!
//! The main struct of this library is [`Converter`]. Create an instance with a [`Config`] and
//! then call one of the conversion methods.
//!
//! ```rust
//! use blahtex::{Config, Converter};
//!
//! let converter = Converter::new(Config::default());
//! let mathml = converter.convert("n = 1").unwrap();
//! assert_eq!(mathml, "<mrow><mi>n</mi><mo>=</mo><mn>1</mn></mrow>");
//!
//! // Errors are reported with their position in the input, counted in characters.
//! let xml = converter.convert_to_xml("2^{5");
//! assert_eq!(
//!     xml,
//!     "<blahtex><error><id>UnmatchedOpenBrace</id><startPos>2</startPos><length>1</length></error></blahtex>"
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: With this feature, `Config` implements serde's `Deserialize`.
//! - `ariadne`: With this feature, `LatexError` can be turned into an `ariadne` report.
//!
mod character_class;
mod error;
mod lexer;
mod parser;
mod spacing;
mod symbols;
mod token;
mod tree;

use log::debug;
#[cfg(feature = "serde")]
use serde::Deserialize;

use mathml_renderer::fmt::new_line_and_indent;

pub use self::character_class::Class;
pub use self::error::{ErrorKind, LatexError};
pub use self::lexer::tokenize;
pub use self::spacing::{SpacingMode, decorate};
pub use self::symbols::{SymbolEntry, resolve};
pub use self::token::{Span, TokSpan, Token};
pub use self::tree::ExpressionNode;
pub use mathml_renderer::{ast::MathNode, attribute::Encoding};

use self::parser::{Limits, Parser};

/// Configuration object for the LaTeX to MathML conversion.
///
/// # Example usage
///
/// ```rust
/// use blahtex::{Config, Encoding, SpacingMode};
///
/// // Default values
/// let config = Config::default();
///
/// let config = Config {
///     spacing: SpacingMode::Tight,
///     encoding: Encoding::Raw,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Config {
    /// How much spacing information to write. See [`SpacingMode`] for details.
    pub spacing: SpacingMode,
    /// How to write characters outside of ASCII.
    pub encoding: Encoding,
    /// If `true`, documents are pretty-printed with newlines and indentation.
    pub indented: bool,
    /// Inputs with more tokens than this are rejected with [`ErrorKind::TooManyTokens`].
    pub max_tokens: usize,
    /// Groups, font wrappers and scripts nested deeper than this are rejected with
    /// [`ErrorKind::NestingTooDeep`].
    pub max_nesting: usize,
}

impl Default for Config {
    fn default() -> Self {
        let limits = Limits::default();
        Config {
            spacing: SpacingMode::default(),
            encoding: Encoding::default(),
            indented: false,
            max_tokens: limits.max_tokens,
            max_nesting: limits.max_nesting,
        }
    }
}

impl Config {
    #[inline]
    fn limits(&self) -> Limits {
        Limits {
            max_tokens: self.max_tokens,
            max_nesting: self.max_nesting,
        }
    }
}

/// The result of parsing one input: either a tree or the error that stopped the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Success(ExpressionNode),
    Failure(Box<LatexError>),
}

impl Document {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Document::Success(_))
    }

    /// Write this document as XML.
    ///
    /// A successful parse gives `<blahtex><mathml><markup>...</markup></mathml></blahtex>`,
    /// a failed one `<blahtex><error>...</error></blahtex>`.
    pub fn to_xml(&self, config: &Config) -> String {
        let mut output = String::new();
        match self {
            Document::Success(tree) => {
                let node = decorate(tree, config.spacing);
                let base_indent = usize::from(config.indented);
                output.push_str("<blahtex>");
                new_line_and_indent(&mut output, base_indent);
                output.push_str("<mathml>");
                new_line_and_indent(&mut output, base_indent * 2);
                output.push_str("<markup>");
                // Writing to a `String` never fails.
                let _ = node.emit(&mut output, base_indent * 3, config.encoding);
                new_line_and_indent(&mut output, base_indent * 2);
                output.push_str("</markup>");
                new_line_and_indent(&mut output, base_indent);
                output.push_str("</mathml>");
                if config.indented {
                    output.push('\n');
                }
                output.push_str("</blahtex>");
            }
            Document::Failure(err) => err.to_xml(&mut output, config.indented),
        }
        output
    }
}

/// Parse a list of tokens with the default limits.
pub fn parse(tokens: &[TokSpan<'_>]) -> Document {
    parse_with_limits(tokens, Limits::default())
}

fn parse_with_limits(tokens: &[TokSpan<'_>], limits: Limits) -> Document {
    match Parser::new(tokens, limits).parse() {
        Ok(tree) => Document::Success(tree),
        Err(err) => {
            debug!("parse error at {}: {:?}", err.start(), err.kind());
            Document::Failure(err)
        }
    }
}

/// A converter that transforms LaTeX math into MathML.
#[derive(Debug, Default, Clone)]
pub struct Converter {
    config: Config,
}

static_assertions::assert_impl_all!(Converter: Send, Sync);

impl Converter {
    /// Create a new converter with the given configuration.
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse LaTeX text into a [`Document`].
    pub fn document(&self, latex: &str) -> Document {
        debug!("converting {} characters", latex.chars().count());
        let tokens = tokenize(latex);
        parse_with_limits(&tokens, self.config.limits())
    }

    /// Convert LaTeX text to MathML markup, without the surrounding document.
    ///
    /// The markup is never pretty-printed.
    ///
    /// ```rust
    /// use blahtex::{Config, Converter};
    ///
    /// let converter = Converter::new(Config::default());
    /// let mathml = converter.convert(r"\theta(n)").unwrap();
    /// assert_eq!(
    ///     mathml,
    ///     r#"<mrow><mi>&#x3b8;</mi><mo stretchy="false">(</mo><mi>n</mi><mo stretchy="false">)</mo></mrow>"#
    /// );
    /// ```
    pub fn convert(&self, latex: &str) -> Result<String, Box<LatexError>> {
        match self.document(latex) {
            Document::Success(tree) => {
                Ok(decorate(&tree, self.config.spacing).render(self.config.encoding))
            }
            Document::Failure(err) => Err(err),
        }
    }

    /// Convert LaTeX text to a complete XML document, which contains either the MathML markup
    /// or a description of the error.
    pub fn convert_to_xml(&self, latex: &str) -> String {
        let document = self.document(latex);
        let output = document.to_xml(&self.config);
        debug!("wrote {} bytes", output.len());
        output
    }
}
