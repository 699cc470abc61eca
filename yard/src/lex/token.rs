use std::fmt;

use crate::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub typ: TokenT,
    pub span: Span,
}

impl Token {
    pub const fn new(typ: TokenT, span: Span) -> Self {
        Self { typ, span }
    }

    pub fn num(literal: impl Into<String>, span: Span) -> Self {
        Self::new(TokenT::Num(literal.into()), span)
    }

    pub const fn op(typ: OpT, span: Span) -> Self {
        Self::new(TokenT::Op(typ), span)
    }

    pub const fn par(typ: ParT, span: Span) -> Self {
        Self::new(TokenT::Par(typ), span)
    }

    pub fn as_num(&self) -> Option<&str> {
        match &self.typ {
            TokenT::Num(n) => Some(n),
            _ => None,
        }
    }

    pub const fn as_op(&self) -> Option<OpT> {
        match self.typ {
            TokenT::Op(o) => Some(o),
            _ => None,
        }
    }

    pub const fn as_par(&self) -> Option<ParT> {
        match self.typ {
            TokenT::Par(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.typ, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenT {
    /// The unparsed literal, only digits and decimal points.
    Num(String),
    Op(OpT),
    Par(ParT),
}

impl fmt::Display for TokenT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => f.write_str(n),
            Self::Op(o) => write!(f, "{o}"),
            Self::Par(p) => write!(f, "{p}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpT {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpT {
    /// Higher binds tighter.
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub const fn as_char(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for OpT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParT {
    Open,
    Close,
}

impl ParT {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn as_char(&self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

impl fmt::Display for ParT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Writes `tokens` separated by single spaces.
pub fn fmt_tokens(f: &mut impl fmt::Write, tokens: &[Token]) -> fmt::Result {
    if let Some((first, others)) = tokens.split_first() {
        write!(f, "{first}")?;
        for t in others {
            write!(f, " {t}")?;
        }
    }
    Ok(())
}
