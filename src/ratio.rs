//! Fractions that locate a point along a segment, without dividing.

use std::cmp::Ordering;

use crate::num::Robust;

/// A ratio `numerator / denominator`, representing a position along a segment.
///
/// A ratio of 0 is the segment's start and a ratio of 1 is its end. We never
/// actually perform the division: the denominator is typically a determinant
/// that might be tiny, and dividing by it would throw away the
/// precision that the robust coordinates went to so much trouble to keep.
///
/// The sign is normalized on construction so that the denominator is never
/// negative; all the queries below rely on this.
///
/// A zero denominator doesn't describe a position at all. The engine never
/// produces one from consistent inputs, but for the record: such a ratio is
/// before the start if its numerator is negative, after the end if its
/// numerator is positive, and on the segment only if the numerator is zero.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RobustRatio<W> {
    numerator: W,
    denominator: W,
}

impl<W: Robust> RobustRatio<W> {
    /// Creates the ratio `numerator / denominator`.
    pub fn new(numerator: W, denominator: W) -> Self {
        if denominator < W::zero() {
            RobustRatio {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            RobustRatio {
                numerator,
                denominator,
            }
        }
    }

    /// The start of a segment.
    pub fn zero() -> Self {
        RobustRatio {
            numerator: W::zero(),
            denominator: W::one(),
        }
    }

    /// The end of a segment.
    pub fn one() -> Self {
        RobustRatio {
            numerator: W::one(),
            denominator: W::one(),
        }
    }

    /// The (normalized) numerator.
    pub fn numerator(&self) -> &W {
        &self.numerator
    }

    /// The (normalized, non-negative) denominator.
    pub fn denominator(&self) -> &W {
        &self.denominator
    }

    /// Is the denominator zero?
    pub fn is_degenerate(&self) -> bool {
        self.denominator == W::zero()
    }

    /// Is this ratio less than zero?
    pub fn is_before_start(&self) -> bool {
        self.numerator < W::zero()
    }

    /// Is this ratio bigger than one?
    pub fn is_after_end(&self) -> bool {
        self.numerator > self.denominator
    }

    /// Is this ratio between zero and one (inclusive)?
    pub fn is_on_segment(&self) -> bool {
        !self.is_before_start() && !self.is_after_end()
    }

    /// Is this ratio strictly between zero and one?
    pub fn is_in_segment(&self) -> bool {
        self.numerator > W::zero() && self.numerator < self.denominator
    }

    /// Is this ratio exactly zero?
    pub fn is_zero(&self) -> bool {
        self.numerator == W::zero()
    }

    /// Is this ratio exactly one?
    pub fn is_one(&self) -> bool {
        !self.is_degenerate() && self.numerator == self.denominator
    }

    /// Is this ratio exactly zero or exactly one?
    pub fn is_on_end(&self) -> bool {
        self.is_zero() || self.is_one()
    }

    /// Compares two ratios, or returns `None` if either is degenerate.
    ///
    /// Ratios with equal denominators are compared by numerator. Otherwise
    /// we cross-multiply, after converting to rationals so that the wide
    /// integer types can't overflow.
    fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        if self.denominator == other.denominator {
            return Some(self.numerator.cmp(&other.numerator));
        }
        let lhs = self.numerator.to_exact() * other.denominator.to_exact();
        let rhs = other.numerator.to_exact() * self.denominator.to_exact();
        Some(lhs.cmp(&rhs))
    }
}

impl<W: Robust> PartialEq for RobustRatio<W> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_degenerate(), other.is_degenerate()) {
            (true, true) => self.numerator == other.numerator,
            (false, false) => self.compare(other) == Some(Ordering::Equal),
            _ => false,
        }
    }
}

impl<W: Robust> PartialOrd for RobustRatio<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}
