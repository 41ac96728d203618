//! Exact fractions over fixed-width or arbitrary-precision integers.
//!
//! A [`Fraction`] is always canonical: in lowest terms, with the sign on the numerator. `1/0` and
//! `-1/0` stand for the two infinities, and `0/0` cannot be built. Overflow of the backing
//! integers is not masked; use `i128` or `BigInt` when the range matters.

pub mod arith;
pub mod convert;
pub mod fract;
pub mod functions;
pub mod int;
pub mod macros;
pub mod ordering;
pub mod parsing;

pub use convert::IntoFraction;
pub use fract::{Fraction, FractionError};
pub use functions::{divide, fraction, reciprocal, sign};
pub use int::{FractionInt, Promote, Promoted};
