//! Free-function entry points. [`divide`] is what textual `a / b` expressions are rewritten into,
//! both by the [`fraction!`](crate::fraction) macro and by the string parser.

use crate::arith::promote_pair;
use crate::convert::IntoFraction;
use crate::fract::{Fraction, FractionError};
use crate::int::{FractionInt, Promote, Promoted};

/// The canonical fraction `num / den`, over the wider of the two integer types.
pub fn fraction<A, B>(num: A, den: B) -> Result<Fraction<Promoted<A, B>>, FractionError>
where
    A: FractionInt + Promote<B>,
    B: FractionInt,
{
    Fraction::from_parts(num, den)
}

/// `x / y` for any two operands that convert into fractions: integers, integral floats and
/// fractions, mixed freely.
pub fn divide<A, B>(x: A, y: B) -> Result<Fraction<Promoted<A::Int, B::Int>>, FractionError>
where
    A: IntoFraction,
    B: IntoFraction,
    A::Int: Promote<B::Int>,
{
    let x = x.into_fraction()?;
    let y = y.into_fraction()?;
    let (x, y) = promote_pair(&x, &y)?;
    x.try_div(&y)
}

/// -1, 0 or 1.
pub fn sign<T: FractionInt>(x: &Fraction<T>) -> i8 {
    x.sign()
}

pub fn reciprocal<T: FractionInt>(x: &Fraction<T>) -> Fraction<T> {
    x.recip()
}
