use std::fmt::{self, Write};
use std::ops::Range;

use strum_macros::IntoStaticStr;

/// Represents an error that occurred during LaTeX parsing.
///
/// The range is measured in characters of the input, not in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexError(pub Range<usize>, pub ErrorKind);

/// The kind of a [`LatexError`].
///
/// The variant name is the identifier that appears in the `<id>` element of an error document.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum ErrorKind {
    UnmatchedOpenBrace,
    UnmatchedCloseBrace,
    UnknownCommand(Box<str>),
    IllegalCharacter,
    IllegalFinalBackslash,
    TooManyTokens,
    NestingTooDeep,
}

impl ErrorKind {
    /// The identifier of this kind, e.g. `UnmatchedOpenBrace`.
    #[inline]
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            ErrorKind::UnmatchedOpenBrace => "Unmatched open brace \"{\".".to_string(),
            ErrorKind::UnmatchedCloseBrace => "Unmatched close brace \"}\".".to_string(),
            ErrorKind::UnknownCommand(cmd) => "Unknown command \"\\".to_string() + cmd + "\".",
            ErrorKind::IllegalCharacter => "Illegal control character in input.".to_string(),
            ErrorKind::IllegalFinalBackslash => {
                "Illegal backslash \"\\\" at the end of the input.".to_string()
            }
            ErrorKind::TooManyTokens => {
                "The input is too long. Please simplify your equation.".to_string()
            }
            ErrorKind::NestingTooDeep => {
                "Groups are nested too deeply. Please simplify your equation.".to_string()
            }
        }
    }
}

impl LatexError {
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.1
    }

    /// The character offset at which the error starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.0.start
    }

    /// The number of characters covered by the error.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the error document for this error to `output`.
    ///
    /// With `indented`, every element starts on a new line, like in a pretty-printed success
    /// document.
    pub fn to_xml(&self, output: &mut String, indented: bool) {
        if indented {
            let _ = write!(
                output,
                "<blahtex>\n    <error>\n        <id>{}</id>\n        <startPos>{}</startPos>\n        <length>{}</length>\n    </error>\n</blahtex>",
                self.1.id(),
                self.start(),
                self.len()
            );
        } else {
            let _ = write!(
                output,
                "<blahtex><error><id>{}</id><startPos>{}</startPos><length>{}</length></error></blahtex>",
                self.1.id(),
                self.start(),
                self.len()
            );
        }
    }
}

#[cfg(feature = "ariadne")]
impl LatexError {
    /// Convert this error into an [`ariadne::Report`] for pretty-printing.
    pub fn to_report<'name>(
        &self,
        source_name: &'name str,
        with_color: bool,
    ) -> ariadne::Report<'static, (&'name str, Range<usize>)> {
        use ariadne::{Label, Report, ReportKind};

        let label_msg = match &self.1 {
            ErrorKind::UnmatchedOpenBrace => "this brace is never closed",
            ErrorKind::UnmatchedCloseBrace => "no brace to close here",
            ErrorKind::UnknownCommand(_) => "unknown command",
            ErrorKind::IllegalCharacter => "control characters are not allowed",
            ErrorKind::IllegalFinalBackslash => "nothing follows this backslash",
            ErrorKind::TooManyTokens | ErrorKind::NestingTooDeep => "limit exceeded here",
        };

        let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Char);
        if !with_color {
            config = config.with_color(false);
        }
        Report::build(ReportKind::Error, (source_name, self.0.start..self.0.start))
            .with_config(config)
            .with_message(self.1.string())
            .with_label(Label::new((source_name, self.0.clone())).with_message(label_msg))
            .finish()
    }
}

impl fmt::Display for LatexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.start, self.1.string())
    }
}

impl std::error::Error for LatexError {}
