//! Total order on fractions, with `-∞ < finite < ∞`.
//!
//! Same-sign finite values are compared by expanding both magnitudes as continued fractions, one
//! integer part at a time. This only ever divides, so it cannot overflow even where `x / y` or
//! the cross products `x.num * y.den` would.

use std::cmp::Ordering;

use crate::fract::Fraction;
use crate::int::FractionInt;

impl<T: FractionInt> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FractionInt> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        // distinct infinities: -∞ against ∞
        if self.is_infinite() && other.is_infinite() {
            return self.sign().cmp(&other.sign());
        }

        let (sx, sy) = (self.sign(), other.sign());
        if sx != sy {
            return sx.cmp(&sy);
        }

        // same nonzero sign, at most one infinite
        let magnitudes = if self.is_infinite() {
            Ordering::Greater
        } else if other.is_infinite() {
            Ordering::Less
        } else {
            cmp_magnitudes(
                self.num.magnitude(),
                self.den.clone(),
                other.num.magnitude(),
                other.den.clone(),
            )
        };

        if sx < 0 {
            magnitudes.reverse()
        } else {
            magnitudes
        }
    }
}

/// Compares `a / b` with `c / d` for non-negative numerators and positive denominators.
fn cmp_magnitudes<T: FractionInt>(mut a: T, mut b: T, mut c: T, mut d: T) -> Ordering {
    loop {
        let (q1, r1) = a.div_rem(&b);
        let (q2, r2) = c.div_rem(&d);
        match q1.cmp(&q2) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        match (r1.is_zero(), r2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // r1/b against r2/d is d/r2 against b/r1
            (false, false) => {
                (a, b, c, d) = (d, r2, b, r1);
            }
        }
    }
}
