use blahtex::{Config, Converter, Encoding, SpacingMode};

fn convert(problem: &str) -> String {
    let converter = Converter::new(Config::default());
    match converter.convert(problem) {
        Ok(mathml) => mathml,
        Err(e) => panic!("problem `{problem}` returned an error: {e}"),
    }
}

#[test]
fn main() {
    let problems = [
        (
            "test",
            "<mrow><mi>t</mi><mi>e</mi><mi>s</mi><mi>t</mi></mrow>",
        ),
        (
            "compute(T)",
            r#"<mrow><mi>c</mi><mi>o</mi><mi>m</mi><mi>p</mi><mi>u</mi><mi>t</mi><mi>e</mi><mo stretchy="false">(</mo><mi>T</mi><mo stretchy="false">)</mo></mrow>"#,
        ),
        ("n = 1", "<mrow><mi>n</mi><mo>=</mo><mn>1</mn></mrow>"),
        (
            "n = 1, ... , k - 1",
            "<mrow><mi>n</mi><mo>=</mo><mn>1</mn><mo>,</mo><mo>.</mo><mo>.</mo><mo>.</mo><mo>,</mo><mi>k</mi><mo>-</mo><mn>1</mn></mrow>",
        ),
        (
            r"n \neq 3",
            "<mrow><mi>n</mi><mo>&#x2260;</mo><mn>3</mn></mrow>",
        ),
        (
            "xy = st",
            "<mrow><mi>x</mi><mi>y</mi><mo>=</mo><mi>s</mi><mi>t</mi></mrow>",
        ),
        (
            "n = 2^{h+1} - 1",
            "<mrow><mi>n</mi><mo>=</mo><msup><mn>2</mn><mrow><mi>h</mi><mo>+</mo><mn>1</mn></mrow></msup><mo>-</mo><mn>1</mn></mrow>",
        ),
        (
            r"\theta(n) = \theta(2^{h+1} - 1)",
            r#"<mrow><mi>&#x3b8;</mi><mo stretchy="false">(</mo><mi>n</mi><mo stretchy="false">)</mo><mo>=</mo><mi>&#x3b8;</mi><mo stretchy="false">(</mo><msup><mn>2</mn><mrow><mi>h</mi><mo>+</mo><mn>1</mn></mrow></msup><mo>-</mo><mn>1</mn><mo stretchy="false">)</mo></mrow>"#,
        ),
        (
            r"S = G - \{ e \}",
            r#"<mrow><mi>S</mi><mo>=</mo><mi>G</mi><mo>-</mo><mo stretchy="false">{</mo><mi>e</mi><mo stretchy="false">}</mo></mrow>"#,
        ),
        (
            "2(k - 1) - 1 + 2 = 2k - 2 - 1 + 2 = 2k - 1",
            r#"<mrow><mn>2</mn><mo stretchy="false">(</mo><mi>k</mi><mo>-</mo><mn>1</mn><mo stretchy="false">)</mo><mo>-</mo><mn>1</mn><mo>+</mo><mn>2</mn><mo>=</mo><mn>2</mn><mi>k</mi><mo>-</mo><mn>2</mn><mo>-</mo><mn>1</mn><mo>+</mo><mn>2</mn><mo>=</mo><mn>2</mn><mi>k</mi><mo>-</mo><mn>1</mn></mrow>"#,
        ),
        (
            r"\theta(n)",
            r#"<mrow><mi>&#x3b8;</mi><mo stretchy="false">(</mo><mi>n</mi><mo stretchy="false">)</mo></mrow>"#,
        ),
        (
            r"\theta(2^h)",
            r#"<mrow><mi>&#x3b8;</mi><mo stretchy="false">(</mo><msup><mn>2</mn><mi>h</mi></msup><mo stretchy="false">)</mo></mrow>"#,
        ),
        (
            r"x, y, s, t, m, n \in \mathbb{R}",
            r#"<mrow><mi>x</mi><mo>,</mo><mi>y</mi><mo>,</mo><mi>s</mi><mo>,</mo><mi>t</mi><mo>,</mo><mi>m</mi><mo>,</mo><mi>n</mi><mo>&#x2208;</mo><mi mathvariant="double-struck">R</mi></mrow>"#,
        ),
        (
            r"f : \mathbb{N} \rightarrow \mathbb{N}",
            r#"<mrow><mi>f</mi><mo>:</mo><mi mathvariant="double-struck">N</mi><mo>&#x2192;</mo><mi mathvariant="double-struck">N</mi></mrow>"#,
        ),
        (
            r"g : \mathbb{N}^2 \rightarrow \mathbb{Z}",
            r#"<mrow><mi>g</mi><mo>:</mo><msup><mi mathvariant="double-struck">N</mi><mn>2</mn></msup><mo>&#x2192;</mo><mi mathvariant="double-struck">Z</mi></mrow>"#,
        ),
        (
            "g(m,n) = (2 - n) f(m)",
            r#"<mrow><mi>g</mi><mo stretchy="false">(</mo><mi>m</mi><mo>,</mo><mi>n</mi><mo stretchy="false">)</mo><mo>=</mo><mo stretchy="false">(</mo><mn>2</mn><mo>-</mo><mi>n</mi><mo stretchy="false">)</mo><mi>f</mi><mo stretchy="false">(</mo><mi>m</mi><mo stretchy="false">)</mo></mrow>"#,
        ),
        ("W_3", "<msub><mi>W</mi><mn>3</mn></msub>"),
    ];

    for (problem, expected) in problems {
        assert_eq!(convert(problem), expected, "problem `{problem}`");
    }
}

#[test]
fn document_envelope() {
    let converter = Converter::new(Config::default());
    assert_eq!(
        converter.convert_to_xml("n = 1"),
        "<blahtex><mathml><markup><mrow><mi>n</mi><mo>=</mo><mn>1</mn></mrow></markup></mathml></blahtex>"
    );
}

#[test]
fn conversion_is_deterministic() {
    let converter = Converter::new(Config::default());
    let problem = r"\theta(n) = \theta(2^{h+1} - 1)";
    assert_eq!(
        converter.convert_to_xml(problem),
        converter.convert_to_xml(problem)
    );
    // Structurally equal inputs give the same output.
    assert_eq!(convert("{x}"), convert("x"));
    assert_eq!(convert("n=1"), convert("n  =  1"));
}

#[test]
fn raw_encoding() {
    let converter = Converter::new(Config {
        encoding: Encoding::Raw,
        ..Default::default()
    });
    assert_eq!(
        converter.convert(r"\alpha \leq \Omega").unwrap(),
        r#"<mrow><mi>α</mi><mo>≤</mo><mi mathvariant="normal">Ω</mi></mrow>"#
    );
}

#[test]
fn tight_spacing() {
    let converter = Converter::new(Config {
        spacing: SpacingMode::Tight,
        ..Default::default()
    });
    assert_eq!(
        converter.convert("f(m,n) = 1").unwrap(),
        r#"<mrow><mi>f</mi><mo stretchy="false" lspace="0" rspace="0">(</mo><mi>m</mi><mo lspace="0" rspace="0.1667em">,</mo><mi>n</mi><mo stretchy="false" lspace="0" rspace="0">)</mo><mo lspace="0.2778em" rspace="0.2778em">=</mo><mn>1</mn></mrow>"#
    );
}

#[test]
fn wide_spacing_matches_moderate() {
    let wide = Converter::new(Config {
        spacing: SpacingMode::Wide,
        ..Default::default()
    });
    assert_eq!(wide.convert("a - b = c").unwrap(), convert("a - b = c"));
}

#[test]
fn primes_and_scripts() {
    assert_eq!(
        convert("f'(x)"),
        r#"<mrow><msup><mi>f</mi><mo>&#x2032;</mo></msup><mo stretchy="false">(</mo><mi>x</mi><mo stretchy="false">)</mo></mrow>"#
    );
    assert_eq!(
        convert("x^23"),
        "<mrow><msup><mi>x</mi><mn>2</mn></msup><mn>3</mn></mrow>"
    );
    assert_eq!(
        convert("x_i^2"),
        "<msup><msub><mi>x</mi><mi>i</mi></msub><mn>2</mn></msup>"
    );
}

#[test]
fn empty_groups() {
    assert_eq!(convert(""), "<mrow></mrow>");
    assert_eq!(convert("{}"), "<mrow></mrow>");
    assert_eq!(convert("x^{}"), "<msup><mi>x</mi><mrow></mrow></msup>");
}

#[test]
fn escaping() {
    assert_eq!(
        convert(r"a < b \& c"),
        "<mrow><mi>a</mi><mo>&lt;</mo><mi>b</mi><mo>&amp;</mo><mi>c</mi></mrow>"
    );
}

#[test]
fn explicit_spaces() {
    assert_eq!(
        convert(r"a\ b"),
        r#"<mrow><mi>a</mi><mspace width="0.3333em"/><mi>b</mi></mrow>"#
    );
    // Any run of whitespace after the backslash is one space.
    assert_eq!(convert("a\\ \t\n b"), convert(r"a\ b"));
    assert_eq!(
        convert(r"f(x)\,dx"),
        r#"<mrow><mi>f</mi><mo stretchy="false">(</mo><mi>x</mi><mo stretchy="false">)</mo><mspace width="0.1667em"/><mi>d</mi><mi>x</mi></mrow>"#
    );
    assert_eq!(
        convert(r"a\!b\quad c"),
        r#"<mrow><mi>a</mi><mspace width="-0.1667em"/><mi>b</mi><mspace width="1em"/><mi>c</mi></mrow>"#
    );
}

#[test]
fn output_has_no_control_characters() {
    let converter = Converter::new(Config::default());
    for problem in ["a\u{1}b", "x\u{1b}", "\u{7f}", "a\u{b}b"] {
        let xml = converter.convert_to_xml(problem);
        assert!(
            !xml.chars().any(|ch| ch.is_ascii_control()),
            "problem {problem:?} gave {xml:?}"
        );
    }
}
