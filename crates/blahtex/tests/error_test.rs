use blahtex::{Config, Converter, ErrorKind, LatexError};
use insta::assert_snapshot;

fn error_document(id: &str, start: usize, length: usize) -> String {
    format!(
        "<blahtex><error><id>{id}</id><startPos>{start}</startPos><length>{length}</length></error></blahtex>"
    )
}

#[test]
fn main() {
    let problems = [
        ("2^{5", "UnmatchedOpenBrace", 2, 1),
        ("4^{6 * 2^{5", "UnmatchedOpenBrace", 2, 1),
        ("4^{6} * 2^{5", "UnmatchedOpenBrace", 10, 1),
        ("2^{2{5}", "UnmatchedOpenBrace", 2, 1),
        ("2^5}", "UnmatchedCloseBrace", 3, 1),
        ("}", "UnmatchedCloseBrace", 0, 1),
        (r"\asdf", "UnknownCommand", 0, 5),
        (r"x = \foo + 1", "UnknownCommand", 4, 4),
        (r"\éx", "UnknownCommand", 0, 2),
        (r"\mathrm{ab\asdf}", "UnknownCommand", 10, 5),
        (r"1.1\asdf", "UnknownCommand", 3, 5),
        (r"\theta{\asdf", "UnknownCommand", 7, 5),
        ("x\\", "IllegalFinalBackslash", 1, 1),
        ("a\u{1}b", "IllegalCharacter", 1, 1),
        ("\u{b}x\u{7f}", "IllegalCharacter", 2, 1),
    ];

    let converter = Converter::new(Config::default());
    for (problem, id, start, length) in problems {
        assert_eq!(
            converter.convert_to_xml(problem),
            error_document(id, start, length),
            "problem `{problem}`"
        );
    }
}

#[test]
fn positions_are_characters() {
    let converter = Converter::new(Config::default());
    // Each Greek letter takes two bytes.
    assert_eq!(
        converter.convert_to_xml("αβγ}"),
        error_document("UnmatchedCloseBrace", 3, 1)
    );
}

#[test]
fn limits() {
    let converter = Converter::new(Config {
        max_tokens: 10,
        max_nesting: 3,
        ..Default::default()
    });
    assert_eq!(
        converter.convert_to_xml("a+b+c+d+e+f"),
        error_document("TooManyTokens", 10, 1)
    );
    assert_eq!(
        converter.convert_to_xml("{{{{x}}}}"),
        error_document("NestingTooDeep", 3, 1)
    );
    assert!(converter.convert("{{{x}}}").is_ok());
}

#[test]
fn default_limits() {
    let converter = Converter::new(Config::default());
    let long = "x".repeat(20_001);
    let err = converter.convert(&long).unwrap_err();
    assert_eq!(*err, LatexError(20_000..20_001, ErrorKind::TooManyTokens));

    let deep = format!("{}x{}", "{".repeat(101), "}".repeat(101));
    let err = converter.convert(&deep).unwrap_err();
    assert_eq!(*err, LatexError(100..101, ErrorKind::NestingTooDeep));
}

#[test]
fn long_script_chains() {
    let converter = Converter::new(Config::default());
    let chain = format!("x{}", "^".repeat(19_999));
    assert_eq!(
        converter.convert_to_xml(&chain),
        error_document("NestingTooDeep", 101, 1)
    );
    let chain = format!("x{}", "^".repeat(20_000));
    assert_eq!(
        converter.convert_to_xml(&chain),
        error_document("TooManyTokens", 20_000, 1)
    );
    let chain = format!("x{}", "_1".repeat(1_000));
    assert_eq!(
        converter.convert_to_xml(&chain),
        error_document("NestingTooDeep", 201, 1)
    );
}

#[test]
fn error_messages() {
    let converter = Converter::new(Config::default());
    let err = converter.convert(r"x + \foo").unwrap_err();
    assert_eq!(err.kind().string(), "Unknown command \"\\foo\".");
    assert_eq!(err.to_string(), "4: Unknown command \"\\foo\".");
}

fn report(problem: &str) -> String {
    let converter = Converter::new(Config::default());
    let Err(error) = converter.convert(problem).map_err(|e| *e) else {
        panic!("problem `{}` did not return an error", problem);
    };
    let report = error.to_report("<input>", false);
    let mut buf = Vec::new();
    report
        .write(("<input>", ariadne::Source::from(problem)), &mut buf)
        .expect("failed to write report");
    let output = String::from_utf8(buf).expect("report should be valid UTF-8");
    // Padding at the end of lines depends on the label layout, not on the error.
    output.lines().flat_map(|line| [line.trim_end(), "\n"]).collect()
}

#[test]
fn reports() {
    assert_snapshot!(report("2^{5"), @r#"
    Error: Unmatched open brace "{".
       ╭─[ <input>:1:3 ]
       │
     1 │ 2^{5
       │   ┬
       │   ╰── this brace is never closed
    ───╯
    "#);
    assert_snapshot!(report("2^5}"), @r#"
    Error: Unmatched close brace "}".
       ╭─[ <input>:1:4 ]
       │
     1 │ 2^5}
       │    ┬
       │    ╰── no brace to close here
    ───╯
    "#);
    assert_snapshot!(report(r"θ + \asdf"), @r#"
    Error: Unknown command "\asdf".
       ╭─[ <input>:1:5 ]
       │
     1 │ θ + \asdf
       │     ──┬──
       │       ╰──── unknown command
    ───╯
    "#);
}
