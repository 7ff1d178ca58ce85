use std::fmt::Write;

use crate::attribute::Encoding;

const INDENT: &str = "    ";

/// Start a new line and indent it, if pretty-printing is enabled.
///
/// An `indent_num` of zero means that pretty-printing is disabled.
pub fn new_line_and_indent(s: &mut String, indent_num: usize) {
    if indent_num > 0 {
        s.push('\n');
    }
    for _ in 0..indent_num {
        s.push_str(INDENT);
    }
}

/// Escapes special characters in `input` for safe inclusion in XML content.
/// Specifically, it replaces:
/// - `&` with `&amp;`
/// - `<` with `&lt;`
/// - `>` with `&gt;`
///
/// With [`Encoding::Numeric`], every non-ASCII character is additionally written as a
/// hexadecimal character reference, e.g. `&#x3b8;` for `θ`.
pub fn escape_xml_content(output: &mut String, input: &str, encoding: Encoding) {
    match encoding {
        Encoding::Raw => escape_raw(output, input),
        Encoding::Numeric => {
            for ch in input.chars() {
                match ch {
                    '&' => output.push_str("&amp;"),
                    '<' => output.push_str("&lt;"),
                    '>' => output.push_str("&gt;"),
                    ch if ch.is_ascii() => output.push(ch),
                    ch => {
                        // Writing to a `String` cannot fail.
                        let _ = write!(output, "&#x{:x};", ch as u32);
                    }
                }
            }
        }
    }
}

/// The special characters are all ASCII, so every index returned by `memchr` is a char boundary.
fn escape_raw(output: &mut String, input: &str) {
    let mut rest = input;
    while let Some(index) = memchr::memchr3(b'&', b'<', b'>', rest.as_bytes()) {
        let (before, after) = rest.split_at(index);
        output.push_str(before);
        match after.as_bytes()[0] {
            b'&' => output.push_str("&amp;"),
            b'<' => output.push_str("&lt;"),
            _ => output.push_str("&gt;"),
        }
        rest = &after[1..];
    }
    output.push_str(rest);
}
