//! The formula grammar. Precedence is expressed by layering: each level
//! parses one operand at the next tighter level, then zero or more
//! (operator, operand) pairs, and folds the pairs into a tree. Addition
//! binds loosest, then multiplication, then exponentiation, with
//! parentheses and number literals at the bottom.

use crate::language::{Expression, Operator};
use crate::parsing::combinators::{
    alpha, any, char, concat, delimited, digit, int, letter, many0, many1, map, nat, or, preceded,
    separated0, token, tuple, tuple3, ParseResult, Parser,
};

type Rule = for<'a> fn(&'a str) -> ParseResult<'a, Expression>;

/// The top-level production. `addition` is tried first: it bottoms out
/// through the whole precedence chain, so inputs like `SUM(1,2)` or
/// `A1` (no leading digit or paren) fail it completely and backtrack
/// here, falling through to the function call, reference and number
/// alternatives. That ordering is what disambiguates the grammar, and
/// it is sound because a failed alternative never consumes anything.
pub fn expression(input: &str) -> ParseResult<'_, Expression> {
    let alternatives: Vec<Rule> = vec![addition, function_call, reference, number];
    any(alternatives)(input)
}

fn operators<'i>(table: &[(&'static str, Operator)]) -> impl Parser<'i, Operator> + Clone {
    any(table
        .iter()
        .map(|&(symbol, op)| map(token(symbol), move |_| op))
        .collect())
}

/// A left-associative chain: `a op1 b op2 c` folds to `(a op1 b) op2 c`.
fn binary_operation<'i>(
    table: &[(&'static str, Operator)],
    precedent: impl Parser<'i, Expression> + Clone,
) -> impl Parser<'i, Expression> + Clone {
    map(
        tuple(precedent.clone(), many0(tuple(operators(table), precedent))),
        |(first, pairs)| {
            pairs
                .into_iter()
                .fold(first, |left, (operator, right)| {
                    Expression::binary(operator, left, right)
                })
        },
    )
}

/// A right-associative chain: the tail pairs are folded right to left
/// into a right-leaning tree, and the first operator is attached on
/// top, so `a op1 b op2 c` becomes `a op1 (b op2 c)`.
fn right_associative_operation<'i>(
    table: &[(&'static str, Operator)],
    precedent: impl Parser<'i, Expression> + Clone,
) -> impl Parser<'i, Expression> + Clone {
    map(
        tuple(precedent.clone(), many0(tuple(operators(table), precedent))),
        |(first, pairs)| {
            let mut reversed = pairs.into_iter().rev();
            match reversed.next() {
                None => first,
                Some(last) => {
                    let (operator, right) =
                        reversed.fold(last, |(operator, right), (previous_op, previous)| {
                            (previous_op, Expression::binary(operator, previous, right))
                        });
                    Expression::binary(operator, first, right)
                }
            }
        },
    )
}

fn addition(input: &str) -> ParseResult<'_, Expression> {
    binary_operation(
        &[("+", Operator::Add), ("-", Operator::Subtract)],
        multiplication,
    )(input)
}

fn multiplication(input: &str) -> ParseResult<'_, Expression> {
    binary_operation(
        &[("*", Operator::Multiply), ("/", Operator::Divide)],
        exponentiation,
    )(input)
}

fn exponentiation(input: &str) -> ParseResult<'_, Expression> {
    right_associative_operation(
        &[("**", Operator::Power), ("^", Operator::Power)],
        operand,
    )(input)
}

/// The tightest binding level: a parenthesized expression or a number.
fn operand(input: &str) -> ParseResult<'_, Expression> {
    or(delimited(char('('), expression, char(')')), number)(input)
}

/// A function call: an alphanumeric name followed by a parenthesized,
/// comma-separated argument list, possibly empty.
pub fn function_call(input: &str) -> ParseResult<'_, Expression> {
    map(
        tuple(
            concat(many1(alpha)),
            delimited(char('('), separated0(char(','), expression), char(')')),
        ),
        |(name, args)| Expression::FunctionCall { name, args },
    )(input)
}

/// A cell reference such as `A1`: letters then digits, kept as the
/// address string.
pub fn reference(input: &str) -> ParseResult<'_, Expression> {
    map(
        tuple(concat(many1(letter)), concat(many1(digit))),
        |(letters, digits)| Expression::Reference(format!("{}{}", letters, digits)),
    )(input)
}

/// A number literal, decimal or integer.
pub fn number(input: &str) -> ParseResult<'_, Expression> {
    map(numeric_literal, Expression::Number)(input)
}

fn numeric_literal(input: &str) -> ParseResult<'_, f64> {
    or(or(decimal, signed_decimal), map(int, |n| n as f64))(input)
}

fn decimal(input: &str) -> ParseResult<'_, f64> {
    map(tuple3(nat, char('.'), fraction), |(whole, _, frac)| {
        whole as f64 + frac
    })(input)
}

fn signed_decimal(input: &str) -> ParseResult<'_, f64> {
    or(
        map(preceded(char('-'), decimal), |value| -value),
        preceded(char('+'), decimal),
    )(input)
}

/// The digit run after the decimal point, weighted by its own length so
/// that `25` means twenty-five hundredths.
fn fraction(input: &str) -> ParseResult<'_, f64> {
    map(many1(digit), |digits| {
        let scale = 10f64.powi(digits.len() as i32);
        let value = digits
            .into_iter()
            .fold(0u64, |total, d| total * 10 + (d as u64 - '0' as u64));
        value as f64 / scale
    })(input)
}
