//! evaluation of parsed formulas

use crate::language::{Expression, Operator};
use crate::parsing;
use crate::parsing::combinators::ParseError;

/// Walk an expression tree and produce its value. References and
/// function calls evaluate to zero for now; there is no sheet to look
/// cells up in and no function table to dispatch against. Division by
/// zero follows ordinary floating point semantics.
pub fn evaluate(expression: &Expression) -> f64 {
    match expression {
        Expression::Number(value) => *value,
        Expression::Reference(_) => 0.0,
        Expression::FunctionCall { .. } => 0.0,
        Expression::BinaryOperation {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match operator {
                Operator::Add => left + right,
                Operator::Subtract => left - right,
                Operator::Multiply => left * right,
                Operator::Divide => left / right,
                Operator::Power => left.powf(right),
            }
        }
    }
}

/// Parse a formula and evaluate it in one step.
pub fn evaluate_str(content: &str) -> Result<f64, ParseError> {
    let expression = parsing::parse(content)?;
    Ok(evaluate(&expression))
}
