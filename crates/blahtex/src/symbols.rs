//! The static symbol table, mapping command names and operator characters to what they render as.
use mathml_renderer::attribute::{MathSpacing, MathVariant};

use crate::character_class::Class;

/// What a command or character resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolEntry {
    /// Rendered as `<mi>`, optionally with a fixed math variant.
    Identifier(&'static str, Option<MathVariant>),
    /// Rendered as `<mo>`. The `bool` is `true` for fences, which MathML renderers would stretch
    /// by default.
    Operator(&'static str, Class, bool),
    /// Horizontal space of a fixed width.
    Space(MathSpacing),
    /// A command like `\mathbb`, which takes one argument and applies a math variant to all
    /// identifiers in it.
    FontWrapper(MathVariant),
}

use Class::{BinaryOp as Bin, Close, Default as Ordinary, Open, Operator as Op, Punctuation, Relation as Rel};
use MathVariant::{Bold, DoubleStruck, Fraktur, Italic, Monospace, Normal, SansSerif, Script};
use SymbolEntry::{FontWrapper, Identifier, Operator, Space};

static COMMANDS: phf::Map<&'static str, SymbolEntry> = phf::phf_map! {
    // Lower-case Greek letters
    "alpha" => Identifier("α", None),
    "beta" => Identifier("β", None),
    "gamma" => Identifier("γ", None),
    "delta" => Identifier("δ", None),
    "epsilon" => Identifier("ϵ", None),
    "varepsilon" => Identifier("ε", None),
    "zeta" => Identifier("ζ", None),
    "eta" => Identifier("η", None),
    "theta" => Identifier("θ", None),
    "vartheta" => Identifier("ϑ", None),
    "iota" => Identifier("ι", None),
    "kappa" => Identifier("κ", None),
    "lambda" => Identifier("λ", None),
    "mu" => Identifier("μ", None),
    "nu" => Identifier("ν", None),
    "xi" => Identifier("ξ", None),
    "pi" => Identifier("π", None),
    "varpi" => Identifier("ϖ", None),
    "rho" => Identifier("ρ", None),
    "varrho" => Identifier("ϱ", None),
    "sigma" => Identifier("σ", None),
    "varsigma" => Identifier("ς", None),
    "tau" => Identifier("τ", None),
    "upsilon" => Identifier("υ", None),
    "phi" => Identifier("ϕ", None),
    "varphi" => Identifier("φ", None),
    "chi" => Identifier("χ", None),
    "psi" => Identifier("ψ", None),
    "omega" => Identifier("ω", None),
    // Upper-case Greek letters are upright in TeX.
    "Gamma" => Identifier("Γ", Some(Normal)),
    "Delta" => Identifier("Δ", Some(Normal)),
    "Theta" => Identifier("Θ", Some(Normal)),
    "Lambda" => Identifier("Λ", Some(Normal)),
    "Xi" => Identifier("Ξ", Some(Normal)),
    "Pi" => Identifier("Π", Some(Normal)),
    "Sigma" => Identifier("Σ", Some(Normal)),
    "Upsilon" => Identifier("Υ", Some(Normal)),
    "Phi" => Identifier("Φ", Some(Normal)),
    "Psi" => Identifier("Ψ", Some(Normal)),
    "Omega" => Identifier("Ω", Some(Normal)),
    // Letter-like symbols
    "infty" => Identifier("∞", None),
    "partial" => Identifier("∂", None),
    "nabla" => Identifier("∇", None),
    "ell" => Identifier("ℓ", None),
    "hbar" => Identifier("ℏ", None),
    "aleph" => Identifier("ℵ", None),
    "emptyset" => Identifier("∅", None),
    // Named functions
    "sin" => Identifier("sin", None),
    "cos" => Identifier("cos", None),
    "tan" => Identifier("tan", None),
    "cot" => Identifier("cot", None),
    "sec" => Identifier("sec", None),
    "csc" => Identifier("csc", None),
    "log" => Identifier("log", None),
    "ln" => Identifier("ln", None),
    "exp" => Identifier("exp", None),
    "lim" => Identifier("lim", None),
    "max" => Identifier("max", None),
    "min" => Identifier("min", None),
    "sup" => Identifier("sup", None),
    "inf" => Identifier("inf", None),
    "det" => Identifier("det", None),
    "gcd" => Identifier("gcd", None),
    "deg" => Identifier("deg", None),
    "dim" => Identifier("dim", None),
    "ker" => Identifier("ker", None),
    // Relations
    "neq" => Operator("≠", Rel, false),
    "ne" => Operator("≠", Rel, false),
    "leq" => Operator("≤", Rel, false),
    "le" => Operator("≤", Rel, false),
    "geq" => Operator("≥", Rel, false),
    "ge" => Operator("≥", Rel, false),
    "equiv" => Operator("≡", Rel, false),
    "approx" => Operator("≈", Rel, false),
    "sim" => Operator("∼", Rel, false),
    "simeq" => Operator("≃", Rel, false),
    "cong" => Operator("≅", Rel, false),
    "propto" => Operator("∝", Rel, false),
    "in" => Operator("∈", Rel, false),
    "notin" => Operator("∉", Rel, false),
    "ni" => Operator("∋", Rel, false),
    "subset" => Operator("⊂", Rel, false),
    "supset" => Operator("⊃", Rel, false),
    "subseteq" => Operator("⊆", Rel, false),
    "supseteq" => Operator("⊇", Rel, false),
    "to" => Operator("→", Rel, false),
    "rightarrow" => Operator("→", Rel, false),
    "leftarrow" => Operator("←", Rel, false),
    "gets" => Operator("←", Rel, false),
    "leftrightarrow" => Operator("↔", Rel, false),
    "Rightarrow" => Operator("⇒", Rel, false),
    "Leftarrow" => Operator("⇐", Rel, false),
    "Leftrightarrow" => Operator("⇔", Rel, false),
    "iff" => Operator("⟺", Rel, false),
    "implies" => Operator("⟹", Rel, false),
    "mapsto" => Operator("↦", Rel, false),
    "mid" => Operator("∣", Rel, false),
    "parallel" => Operator("∥", Rel, false),
    "perp" => Operator("⊥", Rel, false),
    // Binary operators
    "pm" => Operator("±", Bin, false),
    "mp" => Operator("∓", Bin, false),
    "times" => Operator("×", Bin, false),
    "div" => Operator("÷", Bin, false),
    "cdot" => Operator("⋅", Bin, false),
    "ast" => Operator("∗", Bin, false),
    "circ" => Operator("∘", Bin, false),
    "bullet" => Operator("∙", Bin, false),
    "cup" => Operator("∪", Bin, false),
    "cap" => Operator("∩", Bin, false),
    "setminus" => Operator("∖", Bin, false),
    "wedge" => Operator("∧", Bin, false),
    "land" => Operator("∧", Bin, false),
    "vee" => Operator("∨", Bin, false),
    "lor" => Operator("∨", Bin, false),
    "oplus" => Operator("⊕", Bin, false),
    "otimes" => Operator("⊗", Bin, false),
    // Large operators
    "sum" => Operator("∑", Op, false),
    "prod" => Operator("∏", Op, false),
    "int" => Operator("∫", Op, false),
    "oint" => Operator("∮", Op, false),
    // Ordinary operators
    "forall" => Operator("∀", Ordinary, false),
    "exists" => Operator("∃", Ordinary, false),
    "neg" => Operator("¬", Ordinary, false),
    "lnot" => Operator("¬", Ordinary, false),
    // Punctuation
    "ldots" => Operator("…", Punctuation, false),
    "cdots" => Operator("⋯", Ordinary, false),
    "colon" => Operator(":", Punctuation, false),
    // Fences
    "{" => Operator("{", Open, true),
    "}" => Operator("}", Close, true),
    "lbrace" => Operator("{", Open, true),
    "rbrace" => Operator("}", Close, true),
    "langle" => Operator("⟨", Open, true),
    "rangle" => Operator("⟩", Close, true),
    "lfloor" => Operator("⌊", Open, true),
    "rfloor" => Operator("⌋", Close, true),
    "lceil" => Operator("⌈", Open, true),
    "rceil" => Operator("⌉", Close, true),
    "vert" => Operator("|", Ordinary, true),
    "|" => Operator("‖", Ordinary, true),
    // Escaped characters
    "#" => Identifier("#", None),
    "$" => Identifier("$", None),
    "%" => Identifier("%", None),
    "&" => Operator("&", Ordinary, false),
    "_" => Identifier("_", None),
    // Spaces
    " " => Space(MathSpacing::SixMu),
    "," => Space(MathSpacing::ThreeMu),
    ":" => Space(MathSpacing::FourMu),
    ">" => Space(MathSpacing::FourMu),
    ";" => Space(MathSpacing::FiveMu),
    "!" => Space(MathSpacing::NegativeThreeMu),
    "quad" => Space(MathSpacing::Quad),
    "qquad" => Space(MathSpacing::Qquad),
    // Font wrappers
    "mathbb" => FontWrapper(DoubleStruck),
    "mathbf" => FontWrapper(Bold),
    "mathrm" => FontWrapper(Normal),
    "mathit" => FontWrapper(Italic),
    "mathsf" => FontWrapper(SansSerif),
    "mathtt" => FontWrapper(Monospace),
    "mathfrak" => FontWrapper(Fraktur),
    "mathcal" => FontWrapper(Script),
};

/// Look up a command name (without the backslash).
#[inline]
pub fn resolve(name: &str) -> Option<&'static SymbolEntry> {
    COMMANDS.get(name)
}

/// Classify a plain input character which is rendered as an operator.
///
/// Returns `None` for letters, digits and all other characters, which become identifiers or
/// numbers.
pub fn resolve_char(ch: char) -> Option<SymbolEntry> {
    let entry = match ch {
        '=' => Operator("=", Rel, false),
        '<' => Operator("<", Rel, false),
        '>' => Operator(">", Rel, false),
        ':' => Operator(":", Rel, false),
        '+' => Operator("+", Bin, false),
        '-' => Operator("-", Bin, false),
        '*' => Operator("∗", Bin, false),
        '/' => Operator("/", Ordinary, false),
        '.' => Operator(".", Ordinary, false),
        ',' => Operator(",", Punctuation, false),
        ';' => Operator(";", Punctuation, false),
        '!' => Operator("!", Close, false),
        '?' => Operator("?", Close, false),
        '(' => Operator("(", Open, true),
        ')' => Operator(")", Close, true),
        '[' => Operator("[", Open, true),
        ']' => Operator("]", Close, true),
        '|' => Operator("|", Ordinary, true),
        _ => return None,
    };
    Some(entry)
}
