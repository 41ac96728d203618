//! Backing integer types for [`Fraction`](crate::fract::Fraction).
//!
//! A fraction stores its numerator and denominator in a single integer type. Any fixed-width
//! primitive works, as does [`num_bigint::BigInt`] with the `bigint` feature. The bounded signed
//! types carry one value, their minimum, that has no positive counterpart: [`FractionInt::extremal`]
//! exposes it so the constructor can refuse it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};

/// An integer type that can back a fraction.
pub trait FractionInt:
    Integer + Clone + Hash + Debug + Display + FromPrimitive + ToPrimitive
{
    /// Whether the type has negative values. Negating a fraction over an unsigned type is an error.
    const SIGNED: bool;

    /// The most negative representable value, if the type is bounded and signed.
    fn extremal() -> Option<Self>;

    /// Divides both arguments by the gcd of their magnitudes. Never overflows, including on the
    /// extremal value. `(0, 0)` is returned unchanged.
    fn reduce(num: Self, den: Self) -> (Self, Self);

    /// The value as a double, saturating to infinity when out of range.
    fn to_float(&self) -> f64;

    /// `num / den` as a double. Types whose values can exceed the `f64` range override this to
    /// scale both parts down first, so that a finite quotient does not turn into `inf / inf`.
    fn ratio_to_float(num: &Self, den: &Self) -> f64 {
        num.to_float() / den.to_float()
    }

    /// Converts into another backing type, or `None` if the value doesn't fit.
    fn cast<U: FractionInt>(&self) -> Option<U> {
        if let Some(v) = self.to_i128() {
            U::from_i128(v)
        } else if let Some(v) = self.to_u128() {
            U::from_u128(v)
        } else {
            // wider than 128 bits: only an arbitrary-precision target can hold it
            U::from_str_radix(&self.to_string(), 10).ok()
        }
    }

    /// Whether the value is below zero.
    fn is_negative(&self) -> bool {
        Self::SIGNED && *self < Self::zero()
    }

    /// The absolute value. Only valid for non-extremal values.
    fn magnitude(&self) -> Self {
        if self.is_negative() {
            Self::zero() - self.clone()
        } else {
            self.clone()
        }
    }
}

macro_rules! signed_fraction_int {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl FractionInt for $t {
            const SIGNED: bool = true;

            fn extremal() -> Option<Self> {
                Some(<$t>::MIN)
            }

            fn reduce(num: Self, den: Self) -> (Self, Self) {
                // |MIN| only fits in the unsigned twin, so the gcd is taken there.
                let g: $u = num.unsigned_abs().gcd(&den.unsigned_abs());
                if g == 0 {
                    return (num, den);
                }
                let rescale = |x: $t| {
                    let m = (x.unsigned_abs() / g) as $t;
                    if x < 0 {
                        m.wrapping_neg()
                    } else {
                        m
                    }
                };
                (rescale(num), rescale(den))
            }

            fn to_float(&self) -> f64 {
                *self as f64
            }
        }
    )*};
}

macro_rules! unsigned_fraction_int {
    ($($t:ty),* $(,)?) => {$(
        impl FractionInt for $t {
            const SIGNED: bool = false;

            fn extremal() -> Option<Self> {
                None
            }

            fn reduce(num: Self, den: Self) -> (Self, Self) {
                let g = num.gcd(&den);
                if g == 0 {
                    return (num, den);
                }
                (num / g, den / g)
            }

            fn to_float(&self) -> f64 {
                *self as f64
            }
        }
    )*};
}

signed_fraction_int!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
unsigned_fraction_int!(u8, u16, u32, u64, u128, usize);

#[cfg(feature = "bigint")]
impl FractionInt for num_bigint::BigInt {
    const SIGNED: bool = true;

    fn extremal() -> Option<Self> {
        None
    }

    fn reduce(num: Self, den: Self) -> (Self, Self) {
        let g = num.gcd(&den);
        if num_traits::Zero::is_zero(&g) {
            return (num, den);
        }
        (num / &g, den / &g)
    }

    fn to_float(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn ratio_to_float(num: &Self, den: &Self) -> f64 {
        // keep at most 1000 significant bits in the larger part; f64 tops out near 2^1024
        let shift = num.bits().max(den.bits()).saturating_sub(1000) as usize;
        let n = (num.magnitude() >> shift).to_f64().unwrap_or(f64::NAN);
        let d = (den.magnitude() >> shift).to_f64().unwrap_or(f64::NAN);
        if num.sign() == num_bigint::Sign::Minus {
            -n / d
        } else {
            n / d
        }
    }
}

/// Widest-type inference: the backing type both `Self` and `Rhs` convert into when they meet in
/// one operation.
pub trait Promote<Rhs> {
    type Output: FractionInt;
}

/// Shorthand for the promoted backing type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote_self {
    ($($t:ty),* $(,)?) => {$(
        impl Promote<$t> for $t {
            type Output = $t;
        }
    )*};
}

macro_rules! promote {
    ($($a:ty, $b:ty => $o:ty;)*) => {$(
        impl Promote<$b> for $a {
            type Output = $o;
        }

        impl Promote<$a> for $b {
            type Output = $o;
        }
    )*};
}

promote_self!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Same signedness: the wider type. Mixed: the signed type if it is strictly wider, else the next
// signed width up. Nothing is wider than i128, so u128 with any signed type lands there and can
// fail to convert.
promote! {
    i8, i16 => i16; i8, i32 => i32; i8, i64 => i64; i8, i128 => i128;
    i16, i32 => i32; i16, i64 => i64; i16, i128 => i128;
    i32, i64 => i64; i32, i128 => i128;
    i64, i128 => i128;

    u8, u16 => u16; u8, u32 => u32; u8, u64 => u64; u8, u128 => u128;
    u16, u32 => u32; u16, u64 => u64; u16, u128 => u128;
    u32, u64 => u64; u32, u128 => u128;
    u64, u128 => u128;

    i8, u8 => i16; i8, u16 => i32; i8, u32 => i64; i8, u64 => i128; i8, u128 => i128;
    i16, u8 => i16; i16, u16 => i32; i16, u32 => i64; i16, u64 => i128; i16, u128 => i128;
    i32, u8 => i32; i32, u16 => i32; i32, u32 => i64; i32, u64 => i128; i32, u128 => i128;
    i64, u8 => i64; i64, u16 => i64; i64, u32 => i64; i64, u64 => i128; i64, u128 => i128;
    i128, u8 => i128; i128, u16 => i128; i128, u32 => i128; i128, u64 => i128;
    i128, u128 => i128;
}

// isize and usize follow the same rules as their fixed-width twin. Where the two meet at equal
// width, the fixed-width type wins.
#[cfg(target_pointer_width = "64")]
promote! {
    isize, i8 => isize; isize, i16 => isize; isize, i32 => isize; isize, i64 => i64;
    isize, i128 => i128;
    isize, u8 => isize; isize, u16 => isize; isize, u32 => isize; isize, u64 => i128;
    isize, u128 => i128; isize, usize => i128;

    usize, u8 => usize; usize, u16 => usize; usize, u32 => usize; usize, u64 => u64;
    usize, u128 => u128;
    usize, i8 => i128; usize, i16 => i128; usize, i32 => i128; usize, i64 => i128;
    usize, i128 => i128;
}

#[cfg(target_pointer_width = "32")]
promote! {
    isize, i8 => isize; isize, i16 => isize; isize, i32 => i32; isize, i64 => i64;
    isize, i128 => i128;
    isize, u8 => isize; isize, u16 => isize; isize, u32 => i64; isize, u64 => i128;
    isize, u128 => i128; isize, usize => i64;

    usize, u8 => usize; usize, u16 => usize; usize, u32 => u32; usize, u64 => u64;
    usize, u128 => u128;
    usize, i8 => i64; usize, i16 => i64; usize, i32 => i64; usize, i64 => i64;
    usize, i128 => i128;
}

#[cfg(feature = "bigint")]
mod big_promotions {
    use super::Promote;
    use num_bigint::BigInt;

    promote_self!(BigInt);

    promote! {
        BigInt, i8 => BigInt; BigInt, i16 => BigInt; BigInt, i32 => BigInt;
        BigInt, i64 => BigInt; BigInt, i128 => BigInt; BigInt, isize => BigInt;
        BigInt, u8 => BigInt; BigInt, u16 => BigInt; BigInt, u32 => BigInt;
        BigInt, u64 => BigInt; BigInt, u128 => BigInt; BigInt, usize => BigInt;
    }
}
