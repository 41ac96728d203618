//! The `fraction!` macro: `a / b` written as Rust tokens, rewritten into [`divide`] calls.
//!
//! [`divide`]: crate::functions::divide

/// Builds a fraction from a division written inline.
///
/// `fraction!(n, d)` is [`fraction(n, d)`](crate::functions::fraction). Otherwise every `/`
/// between operands becomes a [`divide`](crate::functions::divide) call, left-associative, and
/// parenthesised groups are rewritten recursively. Operands are literals, identifiers or groups,
/// optionally negated. The result is a `Result<Fraction<_>, FractionError>`.
///
/// ```
/// use fractional::{fraction, Fraction};
///
/// assert_eq!(fraction!(1 / (2 / 3)).unwrap(), Fraction::new(3, 2).unwrap());
/// assert_eq!(fraction!(6, -4).unwrap(), Fraction::new(-3, 2).unwrap());
/// ```
#[macro_export]
macro_rules! fraction {
    (@operand ($($inner:tt)+)) => {
        $crate::fraction!($($inner)+)
    };
    (@operand $x:tt) => {
        $crate::convert::IntoFraction::into_fraction($x)
    };
    (@negate $x:tt) => {
        $crate::fraction!(@operand $x).and_then(|f| f.try_neg())
    };
    (@divide $lhs:expr, $rhs:expr) => {
        $lhs.and_then(|lhs| $rhs.and_then(|rhs| $crate::functions::divide(lhs, rhs)))
    };
    (@acc $acc:expr;) => {
        $acc
    };
    (@acc $acc:expr; / - $x:tt $($rest:tt)*) => {
        $crate::fraction!(@acc $crate::fraction!(@divide $acc, $crate::fraction!(@negate $x)); $($rest)*)
    };
    (@acc $acc:expr; / $x:tt $($rest:tt)*) => {
        $crate::fraction!(@acc $crate::fraction!(@divide $acc, $crate::fraction!(@operand $x)); $($rest)*)
    };
    ($num:expr, $den:expr) => {
        $crate::functions::fraction($num, $den)
    };
    (- $x:tt $($rest:tt)*) => {
        $crate::fraction!(@acc $crate::fraction!(@negate $x); $($rest)*)
    };
    ($x:tt $($rest:tt)*) => {
        $crate::fraction!(@acc $crate::fraction!(@operand $x); $($rest)*)
    };
}
