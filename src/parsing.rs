//! Parsing fractions from text. Input is a chain of divisions like `-6 / 8` or `(1/2)/(3/4)`; each
//! `/` is rewritten into a call to [`divide`], left to right, and nested groups are rewritten
//! recursively.

use std::fmt::Display;
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, opt};
use nom::error::ParseError;
use nom::multi::many0;
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;

use crate::fract::{Fraction, FractionError};
use crate::functions::divide;
use crate::int::{FractionInt, Promote};

/// A parsed division expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A decimal integer literal, possibly with a leading minus.
    Int(String),
    /// A negated parenthesised group.
    Neg(Box<Expr>),
    /// `divide(lhs, rhs)`.
    Divide(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression over the backing type `T`.
    pub fn evaluate<T>(&self) -> Result<Fraction<T>, FractionError>
    where
        T: FractionInt + Promote<T, Output = T>,
    {
        match self {
            Expr::Int(digits) => {
                let value = T::from_str_radix(digits, 10)
                    .map_err(|_| FractionError::OutOfRange(digits.clone()))?;
                Fraction::from_int(value)
            }
            Expr::Neg(inner) => inner.evaluate::<T>()?.try_neg(),
            Expr::Divide(lhs, rhs) => divide(lhs.evaluate::<T>()?, rhs.evaluate::<T>()?),
        }
    }
}

/// Shows the rewritten form, e.g. `divide(divide(1, 2), 3)` for `1/2/3`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Int(digits) => write!(f, "{}", digits),
            Expr::Neg(inner) => write!(f, "-{}", inner),
            Expr::Divide(lhs, rhs) => write!(f, "divide({}, {})", lhs, rhs),
        }
    }
}

/// Parses a complete division expression. Surrounding whitespace is allowed.
pub fn parse_expr(input: &str) -> Result<Expr, FractionError> {
    all_consuming(delimited(multispace0, quotient, multispace0))(input)
        .map(|(_, expr)| expr)
        .map_err(|_| FractionError::ParseError(input.to_owned()))
}

/// Rewrites every division in `input` into a `divide` call, returning the rewritten text.
pub fn rewrite(input: &str) -> Result<String, FractionError> {
    parse_expr(input).map(|expr| expr.to_string())
}

/// Parses operands separated by slashes, folding them into left-associative divisions.
pub fn quotient(input: &str) -> IResult<&str, Expr> {
    let (o, first) = operand(input)?;
    let (o, rest) = many0(preceded(ws(slash), operand))(o)?;

    let expr = rest.into_iter().fold(first, |lhs, rhs| {
        Expr::Divide(Box::new(lhs), Box::new(rhs))
    });
    Ok((o, expr))
}

/// Parses an optionally negated integer or parenthesised group.
pub fn operand(input: &str) -> IResult<&str, Expr> {
    let (o, (minus, atom)) = tuple((opt(ws(minus_sign)), ws(atom)))(input)?;

    let expr = match (minus, atom) {
        (None, atom) => atom,
        (Some(_), Expr::Int(digits)) => Expr::Int(format!("-{}", digits)),
        (Some(_), group) => Expr::Neg(Box::new(group)),
    };
    Ok((o, expr))
}

/// Parses an unsigned integer literal or a parenthesised quotient.
pub fn atom(input: &str) -> IResult<&str, Expr> {
    alt((
        map(digit1, |d: &str| Expr::Int(d.to_owned())),
        delimited(ws(tag("(")), quotient, ws(tag(")"))),
    ))(input)
}

/// A combinator that takes a parser `inner` and produces a parser that also consumes both leading and
/// trailing whitespace, returning the output of `inner`.
fn ws<'a, F: 'a, O, E: ParseError<&'a str>>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: Fn(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parses a minus sign, in many formats.
pub fn minus_sign(input: &str) -> IResult<&str, char> {
    one_of("-﹣－−")(input)
}

/// Parses a slash, as of a fraction.
pub fn slash(input: &str) -> IResult<&str, char> {
    one_of("/⁄∕")(input)
}

impl<T> FromStr for Fraction<T>
where
    T: FractionInt + Promote<T, Output = T>,
{
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = parse_expr(s)?;
        log::debug!("evaluating {:?} as {}", s, expr);
        expr.evaluate()
    }
}
