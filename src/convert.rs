//! Conversions between fractions, integers and floats.

use num_traits::Float;

use crate::fract::{Fraction, FractionError};
use crate::int::FractionInt;

impl<T: FractionInt> Fraction<T> {
    /// The fraction `x / 1`.
    pub fn from_int(x: T) -> Result<Self, FractionError> {
        Self::new(x, T::one())
    }

    /// Reads a float as a fraction. Only integral values and the two infinities are exact; any
    /// other float is an [`FractionError::InexactConversion`].
    pub fn try_from_float<F: Float>(x: F) -> Result<Self, FractionError> {
        let value = x
            .to_f64()
            .ok_or_else(|| FractionError::InexactConversion("a non-f64 float".to_string()))?;
        if x.fract().is_zero() {
            let int = T::from_f64(value).ok_or_else(|| FractionError::OutOfRange(value.to_string()))?;
            Self::new(int, T::one())
        } else if x.is_infinite() {
            if x.is_sign_negative() {
                Self::neg_infinity().map_err(|_| FractionError::OutOfRange(value.to_string()))
            } else {
                Ok(Self::infinity())
            }
        } else {
            Err(FractionError::InexactConversion(value.to_string()))
        }
    }

    /// The numerator as `U`, if the fraction is an integer.
    pub fn to_integer<U: FractionInt>(&self) -> Result<U, FractionError> {
        if !self.denom().is_one() {
            return Err(FractionError::InexactConversion(self.to_string()));
        }
        self.numer()
            .cast::<U>()
            .ok_or_else(|| FractionError::OutOfRange(self.numer().to_string()))
    }

    /// `num / den` as a double. Infinities map to the float infinities.
    pub fn to_f64(&self) -> f64 {
        T::ratio_to_float(self.numer(), self.denom())
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// The same value over another backing type.
    pub fn convert<U: FractionInt>(&self) -> Result<Fraction<U>, FractionError> {
        Fraction::from_parts(self.numer().clone(), self.denom().clone())
    }
}

/// Anything with a defined conversion into a [`Fraction`].
pub trait IntoFraction {
    type Int: FractionInt;

    fn into_fraction(self) -> Result<Fraction<Self::Int>, FractionError>;
}

impl<T: FractionInt> IntoFraction for Fraction<T> {
    type Int = T;

    fn into_fraction(self) -> Result<Fraction<T>, FractionError> {
        Ok(self)
    }
}

impl<T: FractionInt> IntoFraction for &Fraction<T> {
    type Int = T;

    fn into_fraction(self) -> Result<Fraction<T>, FractionError> {
        Ok(self.clone())
    }
}

/// Whole-number floats land in `i128`, the widest primitive, so values like `1e30` convert.
/// Magnitudes beyond `i128` are [`FractionError::OutOfRange`]; build those through
/// [`Fraction::try_from_float`] with a `BigInt` backing type.
impl IntoFraction for f64 {
    type Int = i128;

    fn into_fraction(self) -> Result<Fraction<i128>, FractionError> {
        Fraction::try_from_float(self)
    }
}

impl IntoFraction for f32 {
    type Int = i128;

    fn into_fraction(self) -> Result<Fraction<i128>, FractionError> {
        Fraction::try_from_float(self)
    }
}

macro_rules! int_conversions {
    ($($t:ty),* $(,)?) => {$(
        impl IntoFraction for $t {
            type Int = $t;

            fn into_fraction(self) -> Result<Fraction<$t>, FractionError> {
                Fraction::from_int(self)
            }
        }

        impl TryFrom<$t> for Fraction<$t> {
            type Error = FractionError;

            fn try_from(x: $t) -> Result<Self, Self::Error> {
                Fraction::from_int(x)
            }
        }

        impl<T: FractionInt> TryFrom<Fraction<T>> for $t {
            type Error = FractionError;

            fn try_from(x: Fraction<T>) -> Result<Self, Self::Error> {
                x.to_integer()
            }
        }
    )*};
}

int_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "bigint")]
int_conversions!(num_bigint::BigInt);

impl<T: FractionInt> From<Fraction<T>> for f64 {
    fn from(value: Fraction<T>) -> Self {
        value.to_f64()
    }
}

impl<T: FractionInt> From<Fraction<T>> for f32 {
    fn from(value: Fraction<T>) -> Self {
        value.to_f32()
    }
}
