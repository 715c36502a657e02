//! Floating-point coefficients.
//!
//! [`Real`] adapts any `num_traits::Float` to the [`Scalar`] contract by
//! supplying the total order the engine sorts abscissas with. NaN sorts
//! after every ordered value so that sorting and duplicate grouping stay
//! well defined even on degenerate input.

use crate::traits::Scalar;
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A floating-point coefficient with a total order.
///
/// The `Debug` bound comes with the [`Scalar`] supertraits; every float
/// primitive satisfies it. Division by zero follows the underlying float
/// semantics (infinity or NaN) rather than panicking.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Real<T: Float + Debug>(pub T);

impl<T: Float + Debug> Real<T> {
    /// Returns the wrapped float.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Float + Debug> Scalar for Real<T> {
    fn zero() -> Self {
        Self(T::zero())
    }

    fn one() -> Self {
        Self(T::one())
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        match self.0.partial_cmp(&other.0) {
            Some(ordering) => ordering,
            // At least one side is NaN; order NaN last, NaN == NaN.
            None => match (self.0.is_nan(), other.0.is_nan()) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
        }
    }

    fn field_div(&self, other: &Self) -> Self {
        Self(self.0 / other.0)
    }

    fn from_u64(n: u64) -> Self {
        Self(T::from(n).unwrap_or_else(|| {
            (0..n).fold(T::zero(), |acc, _| acc + T::one())
        }))
    }
}

impl<T: Float + Debug> Add for Real<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: Float + Debug> Sub for Real<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<T: Float + Debug> Mul for Real<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<T: Float + Debug> Neg for Real<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: Float + Debug + fmt::Display> fmt::Display for Real<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
