//! Arithmetic on fractions. Every result goes back through [`Fraction::new`], so results are
//! canonical. Integer overflow follows the backing type: it panics in debug builds and wraps in
//! release builds for the primitives, and never happens for `BigInt`.
//!
//! The `try_*` methods report undefined results as errors. The operator overloads panic instead,
//! and promote mixed operands first: with an integer, to a fraction over the wider backing type;
//! with a float, to that float.

use num_traits::{pow, Pow};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::fract::{Fraction, FractionError};
use crate::int::{FractionInt, Promote, Promoted};

impl<T: FractionInt> Fraction<T> {
    /// `-x`. Fails for unsigned backing types.
    pub fn try_neg(&self) -> Result<Self, FractionError> {
        if !T::SIGNED {
            return Err(FractionError::UnsignedNegation);
        }
        Self::new(T::zero() - self.num.clone(), self.den.clone())
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.magnitude(),
            den: self.den.clone(),
        }
    }

    /// `1 / x`. Zero and the infinities swap: `1/0` is infinity and `1/∞` is zero.
    pub fn recip(&self) -> Self {
        if self.num.is_negative() {
            Self {
                num: T::zero() - self.den.clone(),
                den: T::zero() - self.num.clone(),
            }
        } else {
            Self {
                num: self.den.clone(),
                den: self.num.clone(),
            }
        }
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, FractionError> {
        self.sum(rhs, false)
    }

    /// `x - y`, i.e. `x + (-y)`. For unsigned backing types, a negative result is an
    /// [`FractionError::UnsignedNegation`].
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, FractionError> {
        self.sum(rhs, true)
    }

    fn sum(&self, rhs: &Self, subtract: bool) -> Result<Self, FractionError> {
        if self.is_infinite() && rhs.is_infinite() {
            if (self.sign() == rhs.sign()) == subtract {
                return Err(FractionError::UndefinedResult("infinity minus infinity"));
            }
            return Ok(self.clone());
        }

        // cross-multiply through the reduced factors to keep intermediates small
        let g = self.den.gcd(&rhs.den);
        let x_factor = self.den.clone() / g.clone();
        let y_factor = rhs.den.clone() / g.clone();
        let lhs = self.num.clone() * y_factor.clone();
        let rhs_num = rhs.num.clone() * x_factor.clone();
        let den = x_factor * y_factor * g;

        let num = if subtract {
            if !T::SIGNED && lhs < rhs_num {
                return Err(FractionError::UnsignedNegation);
            }
            lhs - rhs_num
        } else {
            lhs + rhs_num
        };
        Self::new(num, den)
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, FractionError> {
        if (self.is_zero() && rhs.is_infinite()) || (self.is_infinite() && rhs.is_zero()) {
            return Err(FractionError::UndefinedResult("zero times infinity"));
        }
        // reduce each numerator against the other denominator first
        let a = Self::new(self.num.clone(), rhs.den.clone())?;
        let b = Self::new(rhs.num.clone(), self.den.clone())?;
        Self::new(a.num * b.num, a.den * b.den)
    }

    /// `x * (1 / y)`. Dividing by zero gives a signed infinity; `0 / 0` and `∞ / ∞` are
    /// undefined.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, FractionError> {
        self.try_mul(&rhs.recip())
    }

    /// `x^n`. Negative exponents raise the reciprocal, so `0^-1` is infinity. `x^0` is one.
    pub fn try_pow(&self, n: i32) -> Result<Self, FractionError> {
        let e = n.unsigned_abs() as usize;
        let num = pow(self.num.clone(), e);
        let den = pow(self.den.clone(), e);
        if n >= 0 {
            Self::new(num, den)
        } else {
            Self::new(den, num)
        }
    }
}

/// Converts both operands to their common backing type.
pub(crate) fn promote_pair<T, U>(
    x: &Fraction<T>,
    y: &Fraction<U>,
) -> Result<(Fraction<Promoted<T, U>>, Fraction<Promoted<T, U>>), FractionError>
where
    T: FractionInt + Promote<U>,
    U: FractionInt,
{
    Ok((x.convert()?, y.convert()?))
}

impl<T: FractionInt> Neg for Fraction<T> {
    type Output = Self;

    /// # Panics
    /// Panics for unsigned backing types.
    fn neg(self) -> Self::Output {
        self.try_neg()
            .unwrap_or_else(|e| panic!("Cannot negate {}: {}", self, e))
    }
}

impl<T: FractionInt> Pow<i32> for Fraction<T> {
    type Output = Self;

    fn pow(self, rhs: i32) -> Self::Output {
        self.try_pow(rhs)
            .unwrap_or_else(|e| panic!("Cannot compute {} ^ {}: {}", self, rhs, e))
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $checked:ident, $sym:literal) => {
        impl<T, U> $trait<Fraction<U>> for Fraction<T>
        where
            T: FractionInt + Promote<U>,
            U: FractionInt,
        {
            type Output = Fraction<Promoted<T, U>>;

            /// # Panics
            /// Panics if the result is undefined or does not fit the promoted backing type.
            fn $method(self, rhs: Fraction<U>) -> Self::Output {
                promote_pair(&self, &rhs)
                    .and_then(|(x, y)| x.$checked(&y))
                    .unwrap_or_else(|e| panic!("Cannot compute {} {} {}: {}", self, $sym, rhs, e))
            }
        }

        impl<T, U> $trait<U> for Fraction<T>
        where
            T: FractionInt + Promote<U>,
            U: FractionInt,
        {
            type Output = Fraction<Promoted<T, U>>;

            fn $method(self, rhs: U) -> Self::Output {
                let rhs = Fraction::from_int(rhs)
                    .unwrap_or_else(|e| panic!("Cannot compute {} {} ...: {}", self, $sym, e));
                $trait::<Fraction<U>>::$method(self, rhs)
            }
        }

        impl<T: FractionInt> $trait<f64> for Fraction<T> {
            type Output = f64;

            fn $method(self, rhs: f64) -> f64 {
                self.to_f64().$method(rhs)
            }
        }

        impl<T: FractionInt> $trait<Fraction<T>> for f64 {
            type Output = f64;

            fn $method(self, rhs: Fraction<T>) -> f64 {
                self.$method(rhs.to_f64())
            }
        }

        impl<T: FractionInt> $trait<f32> for Fraction<T> {
            type Output = f32;

            fn $method(self, rhs: f32) -> f32 {
                self.to_f32().$method(rhs)
            }
        }

        impl<T: FractionInt> $trait<Fraction<T>> for f32 {
            type Output = f32;

            fn $method(self, rhs: Fraction<T>) -> f32 {
                self.$method(rhs.to_f32())
            }
        }

        int_lhs_binop!($trait, $method, $sym; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

        #[cfg(feature = "bigint")]
        int_lhs_binop!($trait, $method, $sym; num_bigint::BigInt);
    };
}

macro_rules! int_lhs_binop {
    ($trait:ident, $method:ident, $sym:literal; $($t:ty),*) => {$(
        impl<T> $trait<Fraction<T>> for $t
        where
            $t: Promote<T>,
            T: FractionInt,
        {
            type Output = Fraction<Promoted<$t, T>>;

            fn $method(self, rhs: Fraction<T>) -> Self::Output {
                let lhs = Fraction::from_int(self)
                    .unwrap_or_else(|e| panic!("Cannot compute ... {} {}: {}", $sym, rhs, e));
                $trait::<Fraction<T>>::$method(lhs, rhs)
            }
        }
    )*};
}

binop!(Add, add, try_add, "+");
binop!(Sub, sub, try_sub, "-");
binop!(Mul, mul, try_mul, "*");
binop!(Div, div, try_div, "/");

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Fraction<i64> {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_add() {
        assert_eq!(frac(1, 12) + frac(5, 3), frac(7, 4));
        assert_eq!(frac(1, 2) + frac(-1, 2), frac(0, 1));
        assert_eq!(frac(1, 6).try_add(&frac(1, 3)), Ok(frac(1, 2)));
    }

    #[test]
    fn test_infinite_add() {
        let inf = Fraction::<i64>::infinity();
        let neg_inf = Fraction::<i64>::neg_infinity().unwrap();
        assert_eq!(inf + frac(1, 2), inf);
        assert_eq!(frac(1, 2) + neg_inf, neg_inf);
        assert_eq!(inf + inf, inf);
        assert_eq!(neg_inf + neg_inf, neg_inf);
        assert_eq!(inf + Fraction::<i64>::zero(), inf);
        assert_eq!(
            inf.try_add(&neg_inf),
            Err(FractionError::UndefinedResult("infinity minus infinity"))
        );
        assert_eq!(inf.try_sub(&inf), Err(FractionError::UndefinedResult("infinity minus infinity")));
        assert_eq!(inf.try_sub(&neg_inf), Ok(inf));
        assert_eq!(frac(3, 1) - inf, neg_inf);
    }

    #[test]
    fn test_sub() {
        assert_eq!(frac(1, 2) - frac(1, 3), frac(1, 6));
        assert_eq!(frac(1, 3) - frac(1, 2), frac(-1, 6));
        let a = Fraction::new(1u32, 3).unwrap();
        let b = Fraction::new(1u32, 2).unwrap();
        assert_eq!(b - a, Fraction::new(1u32, 6).unwrap());
        assert_eq!(a.try_sub(&b), Err(FractionError::UnsignedNegation));
    }

    #[test]
    fn test_mul() {
        assert_eq!(frac(2, 3) * frac(9, 4), frac(3, 2));
        assert_eq!(frac(-2, 3) * frac(3, 2), frac(-1, 1));
        assert_eq!(Fraction::<i64>::infinity() * frac(-1, 2), Fraction::neg_infinity().unwrap());
        assert_eq!(
            Fraction::<i64>::infinity() * Fraction::<i64>::neg_infinity().unwrap(),
            Fraction::neg_infinity().unwrap()
        );
        assert_eq!(
            frac(0, 1).try_mul(&frac(-1, 0)),
            Err(FractionError::UndefinedResult("zero times infinity"))
        );
        assert!(Fraction::<i64>::infinity().try_mul(&frac(0, 1)).is_err());
    }

    #[test]
    fn test_mul_cross_reduces() {
        // 100/3 * 3/100 would overflow i8 without reducing first
        let a = Fraction::new(100i8, 3).unwrap();
        let b = Fraction::new(3i8, 100).unwrap();
        assert_eq!(a * b, Fraction::one());
    }

    #[test]
    fn test_div() {
        assert_eq!(frac(1, 2) / frac(1, 4), frac(2, 1));
        assert_eq!(frac(1, 2) / frac(0, 1), Fraction::infinity());
        assert_eq!(frac(-1, 2) / frac(0, 1), Fraction::neg_infinity().unwrap());
        assert_eq!(frac(1, 2) / Fraction::<i64>::infinity(), Fraction::zero());
        assert!(frac(0, 1).try_div(&frac(0, 1)).is_err());
        assert!(Fraction::<i64>::infinity().try_div(&Fraction::infinity()).is_err());
    }

    #[test]
    fn test_neg_abs_recip() {
        assert_eq!(-frac(1, 2), frac(-1, 2));
        assert_eq!(-Fraction::<i64>::infinity(), Fraction::neg_infinity().unwrap());
        assert_eq!(
            Fraction::new(1u8, 2).unwrap().try_neg(),
            Err(FractionError::UnsignedNegation)
        );
        assert_eq!(Fraction::new(0u8, 2).unwrap().try_neg(), Err(FractionError::UnsignedNegation));
        assert_eq!(frac(-3, 4).abs(), frac(3, 4));
        assert_eq!(Fraction::<i64>::neg_infinity().unwrap().abs(), Fraction::infinity());
        assert_eq!(frac(-3, 4).recip(), frac(-4, 3));
        assert_eq!(frac(0, 1).recip(), Fraction::infinity());
        assert_eq!(Fraction::<i64>::infinity().recip(), Fraction::zero());
        assert_eq!(Fraction::<i64>::neg_infinity().unwrap().recip(), Fraction::zero());
    }

    #[test]
    #[should_panic(expected = "Cannot negate")]
    fn test_neg_unsigned_panics() {
        let _ = -Fraction::new(1u16, 3).unwrap();
    }

    #[test]
    fn test_pow() {
        assert_eq!(frac(2, 3).pow(-2), frac(9, 4));
        assert_eq!(frac(2, 3).pow(3), frac(8, 27));
        assert_eq!(frac(1, 3).pow(0), frac(1, 1));
        assert_eq!(frac(-1, 2).pow(3), frac(-1, 8));
        assert_eq!(frac(-2, 3).pow(-1), frac(-3, 2));
        assert_eq!(frac(0, 1).pow(-1), Fraction::infinity());
        assert_eq!(frac(0, 1).pow(0), Fraction::one());
        assert_eq!(Fraction::<i64>::infinity().pow(-2), Fraction::zero());
    }

    #[test]
    fn test_mixed_integer_promotion() {
        let a = Fraction::new(1i8, 2).unwrap();
        let b: Fraction<i32> = a + 1000i32;
        assert_eq!(b, Fraction::new(2001, 2).unwrap());
        let c: Fraction<i16> = 3u8 * a;
        assert_eq!(c, Fraction::new(3, 2).unwrap());
        let d: Fraction<i64> = Fraction::new(3i32, 4).unwrap() / Fraction::new(1i64, 2).unwrap();
        assert_eq!(d, Fraction::new(3, 2).unwrap());
        let e: Fraction<u16> = Fraction::new(1u8, 2).unwrap() - Fraction::new(1u16, 4).unwrap();
        assert_eq!(e, Fraction::new(1, 4).unwrap());
    }

    #[test]
    fn test_mixed_float_promotion() {
        let half = frac(1, 2);
        assert_eq!(half + 0.25f64, 0.75);
        assert_eq!(1.0f64 - half, 0.5);
        assert_eq!(half * 3.0f32, 1.5f32);
        assert_eq!(1.0f64 / Fraction::<i64>::infinity(), 0.0);
        assert_eq!(half / 0.0f64, f64::INFINITY);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_arithmetic() {
        use num_bigint::BigInt;

        let big = Fraction::new(BigInt::from(i64::MAX), BigInt::from(3)).unwrap();
        let sq = big.clone() * big.clone();
        assert_eq!(
            sq.into_parts(),
            (BigInt::from(i64::MAX) * BigInt::from(i64::MAX), BigInt::from(9))
        );
        let sum: Fraction<BigInt> = big + 1u8;
        assert_eq!(*sum.denom(), BigInt::from(3));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]
        #[test]
        fn test_reciprocal_involution(num in -100_000i64..100_000, den in 1i64..100_000) {
            prop_assume!(num != 0);
            let x = frac(num, den);
            prop_assert_eq!(x.recip().recip(), x);
            prop_assert_eq!(x * x.recip(), Fraction::one());
        }

        #[test]
        fn test_add_matches_cross_multiplication(
            a in -1000i64..1000, b in 1i64..1000, c in -1000i64..1000, d in 1i64..1000
        ) {
            prop_assert_eq!(frac(a, b) + frac(c, d), frac(a * d + c * b, b * d));
            prop_assert_eq!(frac(a, b) - frac(c, d), frac(a * d - c * b, b * d));
            prop_assert_eq!(frac(a, b) * frac(c, d), frac(a * c, b * d));
        }
    }
}
