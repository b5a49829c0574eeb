//! A small algebra of composable parsers. A parser is any function from
//! remaining input to a value paired with the suffix it did not consume.
//! There is no lookahead and no commitment: when an alternative fails,
//! the next one is retried against the original input, so backtracking
//! falls out of the representation rather than being bolted on.

use std::fmt;

/// The reason a parse attempt was rejected. No source position is
/// tracked; alternatives simply retry, and whatever failed last is what
/// the caller gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub reason: String,
}

impl ParseError {
    pub fn new(reason: impl Into<String>) -> ParseError {
        ParseError {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// A successful parse yields the value and the unconsumed suffix of the
/// input. On failure there is no suffix at all, which keeps callers from
/// accidentally resuming in the middle of an abandoned attempt.
pub type ParseResult<'i, T> = Result<(T, &'i str), ParseError>;

/// Anything callable on input text is a parser. Grammar rules are
/// ordinarily written as plain functions, which lets rules refer to one
/// another (and to themselves) regardless of definition order.
pub trait Parser<'i, T>: Fn(&'i str) -> ParseResult<'i, T> {}

impl<'i, T, F> Parser<'i, T> for F where F: Fn(&'i str) -> ParseResult<'i, T> {}

/// Run a parser against a complete input, keeping the value and
/// discarding whatever trailing text was not consumed.
pub fn run<'i, T>(p: impl Parser<'i, T>, input: &'i str) -> Result<T, ParseError> {
    p(input).map(|(value, _rest)| value)
}

// Primitives

/// Succeed with the given value without consuming anything.
pub fn success<'i, T: Clone>(value: T) -> impl Parser<'i, T> + Clone {
    move |input: &'i str| Ok((value.clone(), input))
}

/// Fail with the given reason without consuming anything.
pub fn failure<'i, T>(reason: &str) -> impl Parser<'i, T> + Clone {
    let reason = reason.to_owned();
    move |_input: &'i str| Err(ParseError::new(reason.clone()))
}

/// Consume a single character if the predicate holds on it.
pub fn satisfy<'i>(predicate: impl Fn(char) -> bool + Clone) -> impl Parser<'i, char> + Clone {
    move |input: &'i str| match input.chars().next() {
        Some(c) if predicate(c) => Ok((c, &input[c.len_utf8()..])),
        Some(_) => Err(ParseError::new("does not satisfy condition")),
        None => Err(ParseError::new("unexpected end of input")),
    }
}

/// Consume exactly `n` characters, failing if fewer remain.
pub fn consume<'i>(n: usize) -> impl Parser<'i, &'i str> + Clone {
    move |input: &'i str| match input.char_indices().nth(n) {
        Some((index, _)) => Ok((&input[..index], &input[index..])),
        None if input.chars().count() == n => Ok((input, "")),
        None => Err(ParseError::new("not enough input")),
    }
}

/// Consume exactly the given character.
pub fn char<'i>(expected: char) -> impl Parser<'i, char> + Clone {
    satisfy(move |c| c == expected)
}

/// Consume the literal string verbatim, one character at a time.
pub fn token<'i>(literal: &str) -> impl Parser<'i, String> + Clone {
    concat(all(literal.chars().map(char).collect()))
}

pub fn letter(input: &str) -> ParseResult<'_, char> {
    satisfy(|c: char| c.is_ascii_alphabetic())(input)
}

pub fn digit(input: &str) -> ParseResult<'_, char> {
    satisfy(|c: char| c.is_ascii_digit())(input)
}

pub fn alpha(input: &str) -> ParseResult<'_, char> {
    or(letter, digit)(input)
}

/// Zero or more spaces and tabs.
pub fn space0(input: &str) -> ParseResult<'_, Vec<char>> {
    many0(satisfy(|c: char| c == ' ' || c == '\t'))(input)
}

/// One or more spaces and tabs.
pub fn space1(input: &str) -> ParseResult<'_, Vec<char>> {
    many1(satisfy(|c: char| c == ' ' || c == '\t'))(input)
}

/// Zero or more whitespace characters of any kind.
pub fn multispace0(input: &str) -> ParseResult<'_, Vec<char>> {
    many0(satisfy(|c: char| c.is_whitespace()))(input)
}

/// One or more whitespace characters of any kind.
pub fn multispace1(input: &str) -> ParseResult<'_, Vec<char>> {
    many1(satisfy(|c: char| c.is_whitespace()))(input)
}

/// One or more digits folded into an unsigned integer, most significant
/// digit first.
pub fn nat(input: &str) -> ParseResult<'_, u64> {
    map(many1(digit), |digits| {
        digits
            .into_iter()
            .fold(0u64, |total, d| total * 10 + (d as u64 - '0' as u64))
    })(input)
}

/// A signed integer. A leading `-` negates, a leading `+` is accepted
/// and ignored, and a bare number is taken as is. First match wins.
pub fn int(input: &str) -> ParseResult<'_, i64> {
    or(
        or(
            map(preceded(char('-'), nat), |n| -(n as i64)),
            map(preceded(char('+'), nat), |n| n as i64),
        ),
        map(nat, |n| n as i64),
    )(input)
}

// Combinators

/// Transform the result of a successful parse; failure passes through
/// untouched.
pub fn map<'i, A, B>(
    p: impl Parser<'i, A> + Clone,
    f: impl Fn(A) -> B + Clone,
) -> impl Parser<'i, B> + Clone {
    move |input: &'i str| p(input).map(|(value, rest)| (f(value), rest))
}

/// Monadic bind: run `p`, hand its value to `f` to obtain the next
/// parser, and run that against the remaining input. The first failure
/// short-circuits the whole chain. All sequencing in this module reduces
/// to this.
pub fn sequence<'i, A, B, P>(
    p: impl Parser<'i, A> + Clone,
    f: impl Fn(A) -> P + Clone,
) -> impl Parser<'i, B> + Clone
where
    P: Parser<'i, B>,
{
    move |input: &'i str| {
        let (value, rest) = p(input)?;
        f(value)(rest)
    }
}

/// Try `p1`; if it fails, try `p2` against the original input, never
/// against whatever `p1` left behind. If both fail, the second failure
/// is surfaced.
pub fn or<'i, T>(
    p1: impl Parser<'i, T> + Clone,
    p2: impl Parser<'i, T> + Clone,
) -> impl Parser<'i, T> + Clone {
    move |input: &'i str| p1(input).or_else(|_| p2(input))
}

/// Try each alternative in order against the original input and return
/// the first success. Ordering is the disambiguation mechanism for
/// ambiguous grammars, so callers should list the most specific
/// alternative they want to win first. An empty list fails outright;
/// otherwise the last alternative's failure is surfaced.
pub fn any<'i, T>(parsers: Vec<impl Parser<'i, T> + Clone>) -> impl Parser<'i, T> + Clone {
    move |input: &'i str| {
        let mut last = ParseError::new("no match");
        for p in &parsers {
            match p(input) {
                Ok(found) => return Ok(found),
                Err(error) => last = error,
            }
        }
        Err(last)
    }
}

/// Run every parser in order, threading the remaining input forward, and
/// collect all the results. The first failure aborts.
pub fn all<'i, T>(parsers: Vec<impl Parser<'i, T> + Clone>) -> impl Parser<'i, Vec<T>> + Clone {
    move |input: &'i str| {
        let mut results = Vec::with_capacity(parsers.len());
        let mut rest = input;
        for p in &parsers {
            let (value, remaining) = p(rest)?;
            results.push(value);
            rest = remaining;
        }
        Ok((results, rest))
    }
}

/// Run two parsers in order and pair their results.
pub fn tuple<'i, A, B>(
    p1: impl Parser<'i, A> + Clone,
    p2: impl Parser<'i, B> + Clone,
) -> impl Parser<'i, (A, B)> + Clone {
    move |input: &'i str| {
        let (a, rest) = p1(input)?;
        let (b, rest) = p2(rest)?;
        Ok(((a, b), rest))
    }
}

pub fn tuple3<'i, A, B, C>(
    p1: impl Parser<'i, A> + Clone,
    p2: impl Parser<'i, B> + Clone,
    p3: impl Parser<'i, C> + Clone,
) -> impl Parser<'i, (A, B, C)> + Clone {
    move |input: &'i str| {
        let (a, rest) = p1(input)?;
        let (b, rest) = p2(rest)?;
        let (c, rest) = p3(rest)?;
        Ok(((a, b, c), rest))
    }
}

pub fn tuple4<'i, A, B, C, D>(
    p1: impl Parser<'i, A> + Clone,
    p2: impl Parser<'i, B> + Clone,
    p3: impl Parser<'i, C> + Clone,
    p4: impl Parser<'i, D> + Clone,
) -> impl Parser<'i, (A, B, C, D)> + Clone {
    move |input: &'i str| {
        let (a, rest) = p1(input)?;
        let (b, rest) = p2(rest)?;
        let (c, rest) = p3(rest)?;
        let (d, rest) = p4(rest)?;
        Ok(((a, b, c, d), rest))
    }
}

/// Repeat a parser greedily until it fails, collecting the results.
/// Never fails; zero repetitions is a success. A parser that succeeds
/// without consuming anything will repeat forever, so don't do that.
pub fn many0<'i, T>(p: impl Parser<'i, T> + Clone) -> impl Parser<'i, Vec<T>> + Clone {
    move |input: &'i str| {
        let mut results = Vec::new();
        let mut rest = input;
        while let Ok((value, remaining)) = p(rest) {
            results.push(value);
            rest = remaining;
        }
        Ok((results, rest))
    }
}

/// As [`many0`], but fails if there was not at least one repetition.
pub fn many1<'i, T>(p: impl Parser<'i, T> + Clone) -> impl Parser<'i, Vec<T>> + Clone {
    let p0 = many0(p);
    move |input: &'i str| {
        let (results, rest) = p0(input)?;
        if results.is_empty() {
            Err(ParseError::new("at least one expected"))
        } else {
            Ok((results, rest))
        }
    }
}

/// Run `pre` then `p`, keeping only `p`'s result.
pub fn preceded<'i, A, B>(
    pre: impl Parser<'i, B> + Clone,
    p: impl Parser<'i, A> + Clone,
) -> impl Parser<'i, A> + Clone {
    map(tuple(pre, p), |(_, value)| value)
}

/// Run `p` then `term`, keeping only `p`'s result.
pub fn terminated<'i, A, B>(
    p: impl Parser<'i, A> + Clone,
    term: impl Parser<'i, B> + Clone,
) -> impl Parser<'i, A> + Clone {
    map(tuple(p, term), |(value, _)| value)
}

/// Run `pre`, `p`, `term` in order, keeping only `p`'s result.
pub fn delimited<'i, A, B, C>(
    pre: impl Parser<'i, B> + Clone,
    p: impl Parser<'i, A> + Clone,
    term: impl Parser<'i, C> + Clone,
) -> impl Parser<'i, A> + Clone {
    preceded(pre, terminated(p, term))
}

/// Zero or more occurrences of `p` interleaved with `sep`, keeping only
/// the `p` results. Never fails; no match at all is the empty list.
pub fn separated0<'i, T, S>(
    sep: impl Parser<'i, S> + Clone,
    p: impl Parser<'i, T> + Clone,
) -> impl Parser<'i, Vec<T>> + Clone {
    let p1 = separated1(sep, p);
    move |input: &'i str| p1(input).or_else(|_| Ok((Vec::new(), input)))
}

/// One or more occurrences of `p` interleaved with `sep`, keeping only
/// the `p` results.
pub fn separated1<'i, T, S>(
    sep: impl Parser<'i, S> + Clone,
    p: impl Parser<'i, T> + Clone,
) -> impl Parser<'i, Vec<T>> + Clone {
    map(
        tuple(p.clone(), many0(preceded(sep, p))),
        |(first, rest)| {
            let mut results = vec![first];
            results.extend(rest);
            results
        },
    )
}

/// Join a parsed sequence of characters into a string.
pub fn concat<'i>(p: impl Parser<'i, Vec<char>> + Clone) -> impl Parser<'i, String> + Clone {
    map(p, |chars| chars.into_iter().collect())
}

/// Chain dependent parse steps as linear bindings. Each step may use the
/// values bound by the steps before it, and the first failing step
/// aborts the whole chain. The last expression must itself be a parser;
/// the whole chain expands to nested [`sequence`] calls.
///
/// ```
/// use reckon::chain;
/// use reckon::parsing::combinators::{consume, nat, run, success};
///
/// let decode_run = chain! {
///     count <- nat;
///     glyph <- consume(1);
///     success(glyph.repeat(count as usize))
/// };
/// assert_eq!(run(decode_run, "3W"), Ok(String::from("WWW")));
/// ```
#[macro_export]
macro_rules! chain {
    ($binding:ident <- $step:expr; $($rest:tt)+) => {
        $crate::parsing::combinators::sequence($step, move |$binding| $crate::chain!($($rest)+))
    };
    ($finish:expr) => {
        $finish
    };
}
