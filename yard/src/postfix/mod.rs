use crate::{OpT, ParT, Token, TokenT};


/// Reorders infix `tokens` into postfix notation using the shunting-yard algorithm.
///
/// All operators are left-associative, `*` and `/` bind tighter than `+` and `-`.
/// The output only contains numbers and operators.
pub fn to_postfix(tokens: &[Token]) -> crate::Result<Vec<Token>> {
    let mut ops: Vec<&Token> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for t in tokens {
        match &t.typ {
            TokenT::Num(_) => output.push(t.clone()),
            TokenT::Op(op) => {
                while let Some(top) = ops.last().and_then(|s| s.as_op()) {
                    if !pops_before(*op, top) {
                        break;
                    }
                    output.extend(ops.pop().cloned());
                }
                ops.push(t);
            }
            TokenT::Par(ParT::Open) => ops.push(t),
            TokenT::Par(ParT::Close) => loop {
                match ops.pop() {
                    Some(p) if p.as_par() == Some(ParT::Open) => break,
                    Some(o) => output.push(o.clone()),
                    None => return Err(crate::Error::MismatchedParentheses(t.span)),
                }
            },
        }
    }

    while let Some(t) = ops.pop() {
        if t.as_par().is_some() {
            return Err(crate::Error::MismatchedParentheses(t.span));
        }
        output.push(t.clone());
    }

    if tracing::enabled!(tracing::Level::TRACE) {
        let mut postfix = String::new();
        let _ = crate::fmt_tokens(&mut postfix, &output);
        tracing::trace!(%postfix, "converted to postfix");
    }

    Ok(output)
}

/// Whether `top`, which is already on the operator stack, has to be emitted before `op` is pushed.
const fn pops_before(op: OpT, top: OpT) -> bool {
    op.precedence() <= top.precedence()
}
