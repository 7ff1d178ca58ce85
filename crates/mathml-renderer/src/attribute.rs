#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use strum_macros::{EnumIter, IntoStaticStr};

/// `<mi>` mathvariant attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MathVariant {
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "bold")]
    Bold,
    #[strum(serialize = "italic")]
    Italic,
    #[strum(serialize = "double-struck")]
    DoubleStruck,
    #[strum(serialize = "fraktur")]
    Fraktur,
    #[strum(serialize = "script")]
    Script,
    #[strum(serialize = "sans-serif")]
    SansSerif,
    #[strum(serialize = "monospace")]
    Monospace,
}

/// Values for the `lspace` and `rspace` attributes of `<mo>`, and for the `width` of `<mspace>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MathSpacing {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "0.1667em")]
    ThreeMu, // 3/18 of an em/\quad
    #[strum(serialize = "0.2222em")]
    FourMu, // 4/18 of an em/\quad
    #[strum(serialize = "0.2778em")]
    FiveMu, // 5/18 of an em/\quad
    #[strum(serialize = "0.3333em")]
    SixMu, // interword space
    #[strum(serialize = "1em")]
    Quad,
    #[strum(serialize = "2em")]
    Qquad,
    #[strum(serialize = "-0.1667em")]
    NegativeThreeMu,
}

/// Presentational attributes of an `<mo>` element.
///
/// `None` means that the attribute is not written and the renderer's operator dictionary
/// decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OpAttr {
    pub stretchy: Option<bool>,
    pub lspace: Option<MathSpacing>,
    pub rspace: Option<MathSpacing>,
}

impl OpAttr {
    #[inline]
    pub const fn non_stretchy() -> Self {
        OpAttr {
            stretchy: Some(false),
            lspace: None,
            rspace: None,
        }
    }

    #[inline]
    pub const fn with_spacing(self, lspace: MathSpacing, rspace: MathSpacing) -> Self {
        OpAttr {
            stretchy: self.stretchy,
            lspace: Some(lspace),
            rspace: Some(rspace),
        }
    }
}

/// How characters outside of ASCII are written in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Encoding {
    /// Use numeric character references, e.g. `&#x3b8;`.
    #[default]
    Numeric,
    /// Write the characters directly as UTF-8.
    Raw,
}
