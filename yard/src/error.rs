use std::fmt;

use crate::Span;

pub type Result<T> = std::result::Result<T, Error>;

/// Something that can be shown to a user, pointing at parts of the input.
pub trait UserFacing: Sized + fmt::Debug {
    fn description(&self) -> String;
    fn spans(&self) -> Vec<Span>;
}

/// The pipeline stage an [`Error`] originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    Lex,
    Syntax,
    Eval,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid character '{char}' at position {}", .span.start)]
    InvalidCharacter { char: char, span: Span },
    #[error("Mismatched parentheses")]
    MismatchedParentheses(Span),
    #[error("Invalid number")]
    InvalidNumber(Span),
    #[error("Insufficient operands")]
    InsufficientOperands(Span),
    #[error("Division by zero")]
    DivisionByZero { op: Span, divisor: Span },
    #[error("Malformed expression")]
    MalformedExpression(Span),
}

impl Error {
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InvalidCharacter { .. } => Stage::Lex,
            Self::MismatchedParentheses(_) => Stage::Syntax,
            Self::InvalidNumber(_)
            | Self::InsufficientOperands(_)
            | Self::DivisionByZero { .. }
            | Self::MalformedExpression(_) => Stage::Eval,
        }
    }
}

impl UserFacing for Error {
    fn description(&self) -> String {
        match self {
            Self::InvalidCharacter { char, .. } => format!("Found an invalid character '{char}'"),
            Self::MismatchedParentheses(_) => "Parentheses do not match".into(),
            Self::InvalidNumber(_) => "Invalid number format".into(),
            Self::InsufficientOperands(_) => "Missing an operand".into(),
            Self::DivisionByZero { .. } => "Attempted to divide by 0".into(),
            Self::MalformedExpression(_) => "Malformed expression".into(),
        }
    }

    fn spans(&self) -> Vec<Span> {
        match self {
            Self::InvalidCharacter { span, .. } => vec![*span],
            Self::MismatchedParentheses(s) => vec![*s],
            Self::InvalidNumber(s) => vec![*s],
            Self::InsufficientOperands(s) => vec![*s],
            Self::DivisionByZero { op, divisor } => vec![*op, *divisor],
            Self::MalformedExpression(s) => vec![*s],
        }
    }
}
