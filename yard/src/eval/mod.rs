use crate::{OpT, Span, Token, TokenT};


/// A value on the operand stack and the part of the input it was computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Operand {
    val: f64,
    span: Span,
}

/// Evaluates a postfix token sequence, as produced by [`to_postfix`](crate::to_postfix).
pub fn eval_postfix(tokens: &[Token]) -> crate::Result<f64> {
    let mut stack: Vec<Operand> = Vec::new();

    for t in tokens {
        match &t.typ {
            TokenT::Num(literal) => {
                let val = parse_num(literal, t.span)?;
                stack.push(Operand { val, span: t.span });
            }
            TokenT::Op(op) => {
                let missing = || crate::Error::InsufficientOperands(t.span);
                let b = stack.pop().ok_or_else(missing)?;
                let a = stack.pop().ok_or_else(missing)?;
                let val = apply(*op, t.span, a, b)?;
                stack.push(Operand {
                    val,
                    span: Span::across(a.span, b.span),
                });
            }
            TokenT::Par(_) => return Err(crate::Error::MalformedExpression(t.span)),
        }
    }

    match stack.as_slice() {
        [result] => Ok(result.val),
        [] => Err(crate::Error::MalformedExpression(Span::pos(0))),
        [first, .., last] => Err(crate::Error::MalformedExpression(Span::across(
            first.span, last.span,
        ))),
    }
}

fn parse_num(literal: &str, span: Span) -> crate::Result<f64> {
    match literal.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(crate::Error::InvalidNumber(span)),
    }
}

fn apply(op: OpT, op_span: Span, a: Operand, b: Operand) -> crate::Result<f64> {
    let val = match op {
        OpT::Add => a.val + b.val,
        OpT::Sub => a.val - b.val,
        OpT::Mul => a.val * b.val,
        OpT::Div => {
            if b.val == 0.0 {
                return Err(crate::Error::DivisionByZero {
                    op: op_span,
                    divisor: b.span,
                });
            }
            a.val / b.val
        }
    };
    Ok(val)
}
