//! The generalized divided-difference table.

use crate::error::HermiteError;
use crate::node::ExpandedNode;
use crate::observe::Observer;
use osculant_rings::Scalar;
use std::cmp::Ordering;

/// Factorial values memoized by order.
///
/// Grown on demand by one multiplication per missing order; queries may
/// arrive in any order. Scratch state for a single call.
pub(crate) struct Factorials<S: Scalar> {
    values: Vec<S>,
}

impl<S: Scalar> Factorials<S> {
    pub(crate) fn new() -> Self {
        Self {
            values: vec![S::one()],
        }
    }

    /// Returns `order!`.
    pub(crate) fn get(&mut self, order: usize) -> S {
        while self.values.len() <= order {
            let k = self.values.len();
            let next = self.values[k - 1].clone() * S::from_u64(k as u64);
            self.values.push(next);
        }
        self.values[order].clone()
    }
}

/// Builds the triangular table of generalized divided differences and
/// returns the Newton-form coefficient sequence
/// `f[x₀], f[x₀,x₁], …, f[x₀,…,x_{n−1}]`.
///
/// Confluent cells (equal abscissas, reachable through replication)
/// take the prescribed derivative of the matching order divided by its
/// factorial in place of the undefined difference quotient. Only the
/// current and previous columns are retained, so one call costs O(n²)
/// scalar operations and O(n) space.
///
/// # Errors
///
/// [`HermiteError::MissingDerivative`] when a confluent cell spans
/// replicas of distinct duplicated nodes and no derivative of the
/// required order exists.
pub(crate) fn divided_differences<S: Scalar>(
    expanded: &[ExpandedNode<S>],
    observer: &mut dyn Observer<S>,
) -> Result<Vec<S>, HermiteError> {
    let n = expanded.len();
    let mut pre = Vec::with_capacity(n);
    if n == 0 {
        return Ok(pre);
    }

    let mut factorials = Factorials::new();
    let mut prev: Vec<S> = expanded.iter().map(|e| e.y.clone()).collect();
    pre.push(prev[0].clone());

    for order in 1..n {
        let mut curr = Vec::with_capacity(n - order);
        for row in 0..n - order {
            let left = &expanded[row];
            let right = &expanded[row + order];
            let cell = if left.x.total_cmp(&right.x) == Ordering::Equal {
                // Confluent: every replica in the group carries the
                // originating node's derivative list.
                let raw = right.derivatives.get(order - 1).cloned().ok_or(
                    HermiteError::MissingDerivative {
                        row,
                        col: row + order,
                        order,
                    },
                )?;
                if order == 1 {
                    raw
                } else {
                    raw.field_div(&factorials.get(order))
                }
            } else {
                let numerator = prev[row + 1].clone() - prev[row].clone();
                let denominator = right.x.clone() - left.x.clone();
                numerator.field_div(&denominator)
            };
            observer.step(row, row + order, &cell);
            curr.push(cell);
        }
        pre.push(curr[0].clone());
        prev = curr;
    }

    Ok(pre)
}
