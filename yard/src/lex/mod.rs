use std::str::Chars;

use crate::Span;

pub use token::*;

mod token;

struct Lexer<'a> {
    tokens: Vec<Token>,
    literal: String,
    chars: Chars<'a>,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: Vec::new(),
            literal: String::new(),
            chars: input.chars(),
            cursor: 0,
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.cursor += 1;
        Some(c)
    }

    const fn pos(&self) -> usize {
        self.cursor.saturating_sub(1)
    }

    fn new_atom(&mut self, token: Token) {
        self.end_literal(self.pos());
        self.tokens.push(token);
    }

    /// Flushes the pending number literal, which ends right before `end`.
    fn end_literal(&mut self, end: usize) {
        if self.literal.is_empty() {
            return;
        }

        let start = end - self.literal.chars().count();
        let literal = std::mem::take(&mut self.literal);
        self.tokens.push(Token::num(literal, Span::of(start, end)));
    }
}

/// Splits `input` into numbers, operators and parentheses.
///
/// Number literals are not validated here, `1.2.3` is a single [`TokenT::Num`].
pub fn tokenize(input: &str) -> crate::Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);

    while let Some(c) = lexer.next() {
        let span = Span::pos(lexer.pos());
        match c {
            '0'..='9' | '.' => lexer.literal.push(c),
            '+' => lexer.new_atom(Token::op(OpT::Add, span)),
            '-' => lexer.new_atom(Token::op(OpT::Sub, span)),
            '*' => lexer.new_atom(Token::op(OpT::Mul, span)),
            '/' => lexer.new_atom(Token::op(OpT::Div, span)),
            '(' => lexer.new_atom(Token::par(ParT::Open, span)),
            ')' => lexer.new_atom(Token::par(ParT::Close, span)),
            c if c.is_whitespace() => lexer.end_literal(lexer.pos()),
            c => return Err(crate::Error::InvalidCharacter { char: c, span }),
        }
    }

    lexer.end_literal(lexer.cursor);
    tracing::trace!(count = lexer.tokens.len(), "tokenized");

    Ok(lexer.tokens)
}
