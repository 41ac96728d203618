//! An exact rational data type over a generic backing integer, kept in canonical form: lowest
//! terms, non-negative denominator, and the two infinities `±1/0`. `0/0` is never constructed.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt::Display;
use thiserror::Error;

use crate::int::FractionInt;

/// A fraction `num / den` in canonical form. Equality is structural, which is sound because every
/// value has exactly one canonical representation.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Fraction<T> {
    pub(crate) num: T,
    pub(crate) den: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("Invalid fraction: {0}")]
    InvalidFraction(&'static str),
    #[error("Cannot negate a fraction with an unsigned backing type")]
    UnsignedNegation,
    #[error("Undefined result: {0}")]
    UndefinedResult(&'static str),
    #[error("Inexact conversion of {0}")]
    InexactConversion(String),
    #[error("{0} does not fit in the target integer type")]
    OutOfRange(String),
    #[error("Could not parse {0}")]
    ParseError(String),
}

impl<T: FractionInt> Fraction<T> {
    /// Creates the canonical fraction equal to `num / den`.
    ///
    /// Fails on `0/0`, and on bounded signed types when the reduced numerator or denominator is
    /// the type's minimum value.
    pub fn new(num: T, den: T) -> Result<Self, FractionError> {
        if num.is_zero() && den.is_zero() {
            log::trace!("rejected {}/{}", num, den);
            return Err(FractionError::InvalidFraction("zero over zero"));
        }

        let (num, den) = T::reduce(num, den);

        if let Some(min) = T::extremal() {
            if num == min || den == min {
                log::trace!("rejected extremal {}/{}", num, den);
                return Err(FractionError::InvalidFraction("extremal value unsupported"));
            }
        }

        if den.is_negative() {
            Ok(Self {
                num: T::zero() - num,
                den: T::zero() - den,
            })
        } else {
            Ok(Self { num, den })
        }
    }

    /// Creates a fraction over `T` from integers of other backing types.
    pub fn from_parts<A: FractionInt, B: FractionInt>(num: A, den: B) -> Result<Self, FractionError> {
        let num = num
            .cast::<T>()
            .ok_or_else(|| FractionError::OutOfRange(num.to_string()))?;
        let den = den
            .cast::<T>()
            .ok_or_else(|| FractionError::OutOfRange(den.to_string()))?;
        Self::new(num, den)
    }

    /// The numerator. Carries the sign.
    pub fn numer(&self) -> &T {
        &self.num
    }

    /// The denominator. Never negative.
    pub fn denom(&self) -> &T {
        &self.den
    }

    /// Consumes the fraction, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (T, T) {
        (self.num, self.den)
    }

    pub fn zero() -> Self {
        Self {
            num: T::zero(),
            den: T::one(),
        }
    }

    pub fn one() -> Self {
        Self {
            num: T::one(),
            den: T::one(),
        }
    }

    pub fn infinity() -> Self {
        Self {
            num: T::one(),
            den: T::zero(),
        }
    }

    /// Negative infinity.
    ///
    /// # Errors
    /// Unsigned backing types have no negative infinity.
    pub fn neg_infinity() -> Result<Self, FractionError> {
        if !T::SIGNED {
            return Err(FractionError::UnsignedNegation);
        }
        Ok(Self {
            num: T::zero() - T::one(),
            den: T::zero(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_infinite(&self) -> bool {
        self.den.is_zero()
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// -1, 0 or 1 by the sign of the numerator.
    pub fn sign(&self) -> i8 {
        if self.num.is_zero() {
            0
        } else if self.num.is_negative() {
            -1
        } else {
            1
        }
    }
}

impl<T: FractionInt> Default for Fraction<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Display> Display for Fraction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fraction({}, {})", self.num, self.den)
    }
}

// Canonical fractions are either identical or different: no tolerance applies.

impl<T: FractionInt> AbsDiffEq for Fraction<T> {
    type Epsilon = Self;

    fn default_epsilon() -> Self::Epsilon {
        Self::zero()
    }

    fn abs_diff_eq(&self, other: &Self, _epsilon: Self::Epsilon) -> bool {
        self == other
    }
}

impl<T: FractionInt> RelativeEq for Fraction<T> {
    fn default_max_relative() -> Self::Epsilon {
        Self::zero()
    }

    fn relative_eq(
        &self,
        other: &Self,
        _epsilon: Self::Epsilon,
        _max_relative: Self::Epsilon,
    ) -> bool {
        self == other
    }
}

impl<T: FractionInt> UlpsEq for Fraction<T> {
    fn default_max_ulps() -> u32 {
        0
    }

    fn ulps_eq(&self, other: &Self, _epsilon: Self::Epsilon, _max_ulps: u32) -> bool {
        self == other
    }
}
