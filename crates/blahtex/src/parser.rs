use log::trace;

use crate::{
    character_class::Class,
    error::{ErrorKind, LatexError},
    symbols::{self, SymbolEntry},
    token::{Span, TokSpan, Token},
    tree::ExpressionNode,
};

pub(crate) type ParseResult<T> = Result<T, Box<LatexError>>;

/// Bounds on the work the parser is willing to do for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
    /// The maximum number of tokens, not counting the end of input.
    pub max_tokens: usize,
    /// The maximum depth of nested groups, font wrappers and scripts.
    pub max_nesting: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_tokens: 20_000,
            max_nesting: 100,
        }
    }
}

pub(crate) struct Parser<'source, 'tokens> {
    tokens: &'tokens [TokSpan<'source>],
    pos: usize,
    /// Returned once `tokens` is exhausted.
    eoi: TokSpan<'source>,
    /// The spans of all `{` which have not been closed yet.
    scopes: Vec<Span>,
    depth: usize,
    limits: Limits,
}

#[inline]
fn error<T>(span: Span, kind: ErrorKind) -> ParseResult<T> {
    Err(Box::new(LatexError(span.into(), kind)))
}

impl<'source, 'tokens> Parser<'source, 'tokens> {
    pub(crate) fn new(tokens: &'tokens [TokSpan<'source>], limits: Limits) -> Self {
        let end = tokens.last().map_or(0, |tok| tok.span().end());
        Parser {
            tokens,
            pos: 0,
            eoi: TokSpan::new(Token::Eoi, Span::zero_width(end)),
            scopes: Vec::new(),
            depth: 0,
            limits,
        }
    }

    #[inline]
    fn peek(&self) -> TokSpan<'source> {
        self.tokens.get(self.pos).copied().unwrap_or(self.eoi)
    }

    #[inline]
    fn next_token(&mut self) -> TokSpan<'source> {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Parse the whole input into a single node.
    pub(crate) fn parse(&mut self) -> ParseResult<ExpressionNode> {
        self.check_characters()?;
        let num_tokens = self
            .tokens
            .iter()
            .take_while(|tok| !matches!(tok.token(), Token::Eoi))
            .count();
        trace!(
            "{num_tokens} tokens, limit is {}",
            self.limits.max_tokens
        );
        if num_tokens > self.limits.max_tokens {
            let span = self.tokens[self.limits.max_tokens].span();
            return error(span, ErrorKind::TooManyTokens);
        }
        let nodes = self.parse_sequence()?;
        Ok(ExpressionNode::from_nodes(nodes))
    }

    /// Reject input which can't be represented in the output at all.
    fn check_characters(&self) -> ParseResult<()> {
        for tok in self.tokens {
            match tok.token() {
                // Whitespace never reaches the parser.
                Token::Char(ch) if ch.is_ascii_control() => {
                    return error(tok.span(), ErrorKind::IllegalCharacter);
                }
                // Only a backslash at the very end has no name.
                Token::Command("") => {
                    return error(tok.span(), ErrorKind::IllegalFinalBackslash);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Parse atoms until the end of the input or the `}` of the innermost open group.
    ///
    /// The end token is not consumed.
    fn parse_sequence(&mut self) -> ParseResult<Vec<ExpressionNode>> {
        let mut nodes = Vec::new();
        loop {
            let (tok, span) = self.peek().into_parts();
            match tok {
                Token::Eoi => {
                    // Report the outermost brace that is still open.
                    if let Some(open) = self.scopes.first() {
                        return error(*open, ErrorKind::UnmatchedOpenBrace);
                    }
                    break;
                }
                Token::GroupEnd => {
                    if self.scopes.is_empty() {
                        return error(span, ErrorKind::UnmatchedCloseBrace);
                    }
                    break;
                }
                _ => nodes.push(self.parse_atom()?),
            }
        }
        Ok(nodes)
    }

    /// Parse one primary expression and all the scripts attached to it.
    ///
    /// Each script wraps everything before it, so `x^2_3` is the subscript of `x^2`. Every script
    /// counts as one level of nesting.
    fn parse_atom(&mut self) -> ParseResult<ExpressionNode> {
        let mut node = self.parse_primary()?;
        let mut levels = 0;
        loop {
            let (tok, span) = self.peek().into_parts();
            if !matches!(tok, Token::Circumflex | Token::Underscore | Token::Prime) {
                break;
            }
            self.descend(span)?;
            levels += 1;
            node = match tok {
                Token::Circumflex => {
                    self.next_token();
                    let sup = self.parse_argument()?;
                    ExpressionNode::Superscript {
                        base: Box::new(node),
                        sup: Box::new(sup),
                    }
                }
                Token::Underscore => {
                    self.next_token();
                    let sub = self.parse_argument()?;
                    ExpressionNode::Subscript {
                        base: Box::new(node),
                        sub: Box::new(sub),
                    }
                }
                // A run of primes.
                _ => {
                    let mut count = 0usize;
                    while matches!(self.peek().token(), Token::Prime) {
                        self.next_token();
                        count += 1;
                    }
                    ExpressionNode::Superscript {
                        base: Box::new(node),
                        sup: Box::new(primes(count)),
                    }
                }
            };
        }
        self.depth -= levels;
        Ok(node)
    }

    fn parse_primary(&mut self) -> ParseResult<ExpressionNode> {
        let (tok, span) = self.peek().into_parts();
        match tok {
            Token::Char(ch) if ch.is_ascii_digit() => Ok(self.parse_number()),
            Token::Char(ch) => {
                self.next_token();
                Ok(char_node(ch))
            }
            Token::Command(name) => {
                self.next_token();
                self.parse_command(name, span)
            }
            Token::GroupBegin => {
                self.next_token();
                self.parse_group(span)
            }
            // A script without a base gets an empty base.
            Token::Circumflex
            | Token::Underscore
            | Token::Prime
            | Token::GroupEnd
            | Token::Eoi => Ok(ExpressionNode::empty()),
        }
    }

    /// Parse a run of digits, with at most one embedded decimal point.
    fn parse_number(&mut self) -> ExpressionNode {
        let mut number = String::new();
        let mut seen_dot = false;
        loop {
            match self.peek().token() {
                Token::Char(ch) if ch.is_ascii_digit() => {
                    number.push(*ch);
                }
                Token::Char('.')
                    if !seen_dot
                        && matches!(
                            self.tokens.get(self.pos + 1).map(TokSpan::token),
                            Some(Token::Char(ch)) if ch.is_ascii_digit()
                        ) =>
                {
                    seen_dot = true;
                    number.push('.');
                }
                _ => break,
            }
            self.next_token();
        }
        ExpressionNode::Number(number)
    }

    /// Parse the argument of a script or a font wrapper.
    ///
    /// This is a single character (so `x^23` only puts the `2` into the superscript), a single
    /// command or a group. If the argument is missing, an empty row is returned.
    fn parse_argument(&mut self) -> ParseResult<ExpressionNode> {
        let (tok, span) = self.peek().into_parts();
        match tok {
            Token::Char(ch) => {
                self.next_token();
                if ch.is_ascii_digit() {
                    Ok(ExpressionNode::Number(ch.to_string()))
                } else {
                    Ok(char_node(ch))
                }
            }
            Token::Command(name) => {
                self.next_token();
                self.parse_command(name, span)
            }
            Token::GroupBegin => {
                self.next_token();
                self.parse_group(span)
            }
            Token::Circumflex
            | Token::Underscore
            | Token::Prime
            | Token::GroupEnd
            | Token::Eoi => Ok(ExpressionNode::empty()),
        }
    }

    fn parse_command(&mut self, name: &str, span: Span) -> ParseResult<ExpressionNode> {
        match symbols::resolve(name) {
            Some(SymbolEntry::Identifier(text, variant)) => Ok(ExpressionNode::Identifier {
                text: (*text).to_string(),
                variant: *variant,
            }),
            Some(SymbolEntry::Operator(symbol, class, fence)) => {
                Ok(operator(symbol, *class, *fence))
            }
            Some(SymbolEntry::Space(width)) => Ok(ExpressionNode::Space(*width)),
            Some(SymbolEntry::FontWrapper(variant)) => {
                self.descend(span)?;
                let arg = self.parse_argument()?;
                self.depth -= 1;
                Ok(arg.with_variant(*variant))
            }
            None => error(span, ErrorKind::UnknownCommand(name.into())),
        }
    }

    /// Parse the contents of a group, after its `{` has been consumed.
    fn parse_group(&mut self, open: Span) -> ParseResult<ExpressionNode> {
        self.descend(open)?;
        self.scopes.push(open);
        let nodes = self.parse_sequence()?;
        // `parse_sequence` only returns successfully at the `}` of this group.
        self.next_token();
        self.scopes.pop();
        self.depth -= 1;
        Ok(ExpressionNode::from_nodes(nodes))
    }

    fn descend(&mut self, span: Span) -> ParseResult<()> {
        if self.depth >= self.limits.max_nesting {
            trace!("nesting limit of {} reached", self.limits.max_nesting);
            return error(span, ErrorKind::NestingTooDeep);
        }
        self.depth += 1;
        Ok(())
    }
}

#[inline]
fn operator(symbol: &str, class: Class, stretchy: bool) -> ExpressionNode {
    ExpressionNode::Operator {
        symbol: symbol.to_string(),
        class,
        stretchy,
    }
}

/// Classify a single non-digit character.
fn char_node(ch: char) -> ExpressionNode {
    match symbols::resolve_char(ch) {
        Some(SymbolEntry::Operator(symbol, class, fence)) => operator(symbol, class, fence),
        _ => ExpressionNode::Identifier {
            text: ch.to_string(),
            variant: None,
        },
    }
}

/// The superscript for a run of `'`.
fn primes(count: usize) -> ExpressionNode {
    let symbol = match count {
        1 => "′".to_string(),
        2 => "″".to_string(),
        3 => "‴".to_string(),
        4 => "⁗".to_string(),
        n => "′".repeat(n),
    };
    ExpressionNode::Operator {
        symbol,
        class: Class::Default,
        stretchy: false,
    }
}
