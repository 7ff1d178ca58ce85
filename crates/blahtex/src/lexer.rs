use std::mem;
use std::str::CharIndices;

use crate::token::{Span, TokSpan, Token};

/// The lexer's view of the next character: its byte index, its character index and the
/// character itself (`None` at the end of the input).
#[derive(Debug, Clone, Copy)]
struct Peeked {
    byte: usize,
    pos: usize,
    ch: Option<char>,
}

/// Lexer
///
/// The lexer never fails: unknown characters become `Token::Char` and unknown commands are
/// passed on to the parser, which also rejects control characters and a final backslash.
pub(crate) struct Lexer<'source> {
    input: CharIndices<'source>,
    peek: Peeked,
    input_string: &'source str,
}

impl<'source> Lexer<'source> {
    /// Receive the input source code and generate a LEXER instance.
    pub(crate) fn new(input: &'source str) -> Self {
        let mut lexer = Lexer {
            input: input.char_indices(),
            peek: Peeked {
                byte: 0,
                pos: 0,
                ch: None,
            },
            input_string: input,
        };
        lexer.read_char(); // Initialize `peek`.
        lexer
    }

    /// One character progresses.
    fn read_char(&mut self) -> Peeked {
        // The character index only advances if we actually moved past a character.
        let pos = self.peek.pos + usize::from(self.peek.ch.is_some());
        let next = match self.input.next() {
            Some((byte, ch)) => Peeked {
                byte,
                pos,
                ch: Some(ch),
            },
            None => Peeked {
                byte: self.input_string.len(),
                pos,
                ch: None,
            },
        };
        mem::replace(&mut self.peek, next)
    }

    /// Skip whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek.ch.is_some_and(is_space) {
            self.read_char();
        }
    }

    /// Read one command name (the part after the backslash).
    ///
    /// Returns the name and the character index one past its end.
    #[inline]
    fn read_command(&mut self) -> (&'source str, usize) {
        let start = self.peek.byte;

        // Read in all ASCII alphabetic characters.
        while self.peek.ch.is_some_and(|ch| ch.is_ascii_alphabetic()) {
            self.read_char();
        }

        if start == self.peek.byte {
            // Always read at least one character, e.g. `\{` or `\,`.
            self.read_char();
        }

        let end = self.peek.byte;
        // Both bounds come from `CharIndices`, so they lie on character boundaries.
        (&self.input_string[start..end], self.peek.pos)
    }

    pub(crate) fn next_token(&mut self) -> TokSpan<'source> {
        loop {
            self.skip_whitespace();
            let Peeked { pos, ch, .. } = self.read_char();
            let Some(ch) = ch else {
                return TokSpan::new(Token::Eoi, Span::zero_width(pos));
            };
            let span = Span::new(pos, pos + 1);
            let tok = match ch {
                '%' => {
                    // Skip comments.
                    while self.peek.ch.is_some_and(|ch| ch != '\n') {
                        self.read_char();
                    }
                    continue;
                }
                '{' => Token::GroupBegin,
                '}' => Token::GroupEnd,
                '^' => Token::Circumflex,
                '_' => Token::Underscore,
                '\'' => Token::Prime,
                '\\' if self.peek.ch.is_some_and(is_space) => {
                    // A control space, however much whitespace follows the backslash.
                    self.skip_whitespace();
                    return TokSpan::new(Token::Command(" "), Span::new(pos, pos + 2));
                }
                '\\' => {
                    let (name, end) = self.read_command();
                    return TokSpan::new(Token::Command(name), Span::new(pos, end));
                }
                c => Token::Char(c),
            };
            return TokSpan::new(tok, span);
        }
    }
}

/// ASCII whitespace, including the vertical tab.
#[inline]
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\u{b}'
}

/// Split `input` into tokens. The last token is always `Token::Eoi`.
pub fn tokenize(input: &str) -> Vec<TokSpan<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let is_eoi = matches!(tok.token(), Token::Eoi);
        tokens.push(tok);
        if is_eoi {
            break tokens;
        }
    }
}
