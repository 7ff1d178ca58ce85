#[cfg(feature = "serde")]
use serde::Serialize;

use mathml_renderer::attribute::MathSpacing;

/// TeX's math classes for operators, which determine the spacing around them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Class {
    /// `mathord`
    #[default]
    Default = 0,
    /// `mathop`
    Operator,
    /// `mathbin`
    BinaryOp,
    /// `mathrel`
    Relation,
    /// `mathopen`
    Open,
    /// `mathclose`
    Close,
    /// `mathpunct`
    Punctuation,
}

impl Class {
    /// The space that TeX puts on the left and right of an operator of this class in a row.
    pub(crate) fn spacing(self) -> (MathSpacing, MathSpacing) {
        match self {
            Class::Relation => (MathSpacing::FiveMu, MathSpacing::FiveMu),
            Class::BinaryOp => (MathSpacing::FourMu, MathSpacing::FourMu),
            Class::Operator | Class::Punctuation => (MathSpacing::Zero, MathSpacing::ThreeMu),
            Class::Default | Class::Open | Class::Close => (MathSpacing::Zero, MathSpacing::Zero),
        }
    }

    /// Whether a binary operator following an atom of this class loses its binary spacing.
    ///
    /// This is TeX's rule that turns the `-` in `(-1)` or `= -1` into an ordinary symbol.
    pub(crate) fn cancels_following_binary(self) -> bool {
        matches!(
            self,
            Class::Operator | Class::BinaryOp | Class::Relation | Class::Open | Class::Punctuation
        )
    }

    /// Whether a binary operator preceding an atom of this class loses its binary spacing.
    pub(crate) fn cancels_preceding_binary(self) -> bool {
        matches!(self, Class::Relation | Class::Close | Class::Punctuation)
    }
}
