//! The scalar contract required by the interpolation engine.
//!
//! This module defines the single trait every coefficient type must
//! implement. The contract is deliberately minimal: a handful of field
//! operations, a total order, and an embedding of small integers for
//! factorial denominators.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// The algebraic operations divided-difference interpolation needs.
///
/// # Laws
///
/// - `Add`/`Mul` are associative and commutative with identities `zero()`
///   and `one()`; `Mul` distributes over `Add`
/// - `Neg` is the additive inverse; `Sub` agrees with `Add`/`Neg`
/// - `total_cmp` is a total order consistent with equality of values:
///   two scalars compare `Equal` exactly when they are interchangeable in
///   arithmetic
/// - `field_div` is the inverse of `Mul` for every non-zero divisor
///
/// The order is what the engine sorts and groups abscissas by, so types
/// without a natural total order (e.g. raw floats with NaN) must supply a
/// consistent artificial one; see [`Real`](crate::reals::Real).
pub trait Scalar:
    Clone + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Three-way comparison under the type's total order.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Divides by another scalar.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero; types with an infinity may return it
    /// instead.
    fn field_div(&self, other: &Self) -> Self;

    /// Embeds a non-negative machine integer.
    ///
    /// The default builds `n` by repeated addition of `one()`; types with
    /// a cheaper native conversion should override this.
    fn from_u64(n: u64) -> Self {
        let one = Self::one();
        let mut result = Self::zero();
        for _ in 0..n {
            result = result + one.clone();
        }
        result
    }

    /// Divides by a plain machine integer, e.g. a factorial.
    ///
    /// # Panics
    ///
    /// May panic if `n` is zero, as for [`field_div`](Scalar::field_div).
    fn div_scalar(&self, n: u64) -> Self {
        self.field_div(&Self::from_u64(n))
    }
}
