pub use error::*;
pub use eval::*;
pub use lex::*;
pub use postfix::*;
pub use span::*;

mod error;
mod eval;
mod lex;
mod postfix;
mod span;

/// Tokenizes, converts and evaluates `input` in one go.
///
/// The first error raised by any of the stages is returned as is.
pub fn calculate(input: impl AsRef<str>) -> crate::Result<f64> {
    let input = input.as_ref();
    let tokens = tokenize(input)?;
    let postfix = to_postfix(&tokens)?;
    let val = eval_postfix(&postfix)?;
    tracing::debug!(input, val, "calculated");
    Ok(val)
}
