//! parser for the reckon formula language

use tracing::debug;

use crate::language::Expression;

pub mod combinators;
pub mod parser;

use crate::parsing::combinators::{run, ParseError};

/// Parse a formula into an Expression tree, or return the reason the
/// text was rejected. Trailing input beyond the formula is ignored.
pub fn parse(content: &str) -> Result<Expression, ParseError> {
    match run(parser::expression, content) {
        Ok(expression) => {
            debug!(?expression, "parsed");
            Ok(expression)
        }
        Err(error) => {
            debug!(%error, "rejected");
            Err(error)
        }
    }
}
