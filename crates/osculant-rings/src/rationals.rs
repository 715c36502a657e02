//! Exact rational coefficients.
//!
//! Interpolation over [`Q`] is exact: divided differences, factorial
//! divisions and the monomial expansion introduce no rounding, which makes
//! this the coefficient type of choice for tests and for symbolic work.

use crate::traits::Scalar;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact rational number.
///
/// A thin wrapper around `dashu::rational::RBig` that implements the
/// [`Scalar`] contract. Values are always stored in lowest terms with a
/// positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let numerator = if denominator < 0 {
            -i128::from(numerator)
        } else {
            i128::from(numerator)
        };
        Self(RBig::from_parts(
            IBig::from(numerator),
            UBig::from(denominator.unsigned_abs()),
        ))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from_parts(IBig::from(n), UBig::from(1u8)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> UBig {
        self.0.denominator().clone()
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Scalar for Q {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn one() -> Self {
        Self::from_integer(1)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn field_div(&self, other: &Self) -> Self {
        assert!(
            *other != Self::zero(),
            "division by zero rational"
        );
        Self(self.0.clone() / other.0.clone())
    }

    fn from_u64(n: u64) -> Self {
        Self(RBig::from_parts(IBig::from(n), UBig::from(1u8)))
    }

    fn div_scalar(&self, n: u64) -> Self {
        assert!(n != 0, "division by zero scalar");
        Self(self.0.clone() / RBig::from_parts(IBig::from(n), UBig::from(1u8)))
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
