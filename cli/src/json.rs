use serde::Serialize;
use yard::{Span, Stage, Token, UserFacing};

use crate::Output;

/// The result of one expression.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(flatten)]
    body: Body,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Body {
    Value(f64),
    Tokens(Vec<String>),
    Postfix(Vec<String>),
    Errors(Vec<Diagnostic>),
}

#[derive(Debug, Serialize)]
struct Diagnostic {
    stage: Stage,
    spans: Vec<Span>,
    desc: String,
}

impl Report {
    pub fn new(line: Option<usize>, result: &yard::Result<Output>) -> Self {
        let body = match result {
            Ok(Output::Value(v)) => Body::Value(*v),
            Ok(Output::Tokens(t)) => Body::Tokens(literals(t)),
            Ok(Output::Postfix(t)) => Body::Postfix(literals(t)),
            Ok(Output::Checked) => Body::Errors(Vec::new()),
            Err(e) => Body::Errors(vec![Diagnostic {
                stage: e.stage(),
                spans: e.spans(),
                desc: e.description(),
            }]),
        };
        Self { line, body }
    }
}

fn literals(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(Token::to_string).collect()
}
