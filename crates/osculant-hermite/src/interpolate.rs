//! The public interpolation entry point.

use crate::convert::newton_to_monomial;
use crate::dataset::{prepare, DuplicatePolicy};
use crate::error::HermiteError;
use crate::node::Node;
use crate::observe::{Observer, Silent};
use crate::table::divided_differences;
use osculant_rings::Scalar;

/// A configured Hermite interpolation over a borrowed node list.
///
/// All scratch state (the expanded dataset, column buffers, the factorial
/// memo) lives inside each call, so independent calls never interfere and
/// the same node list can be interpolated concurrently from separate
/// `Hermite` values.
///
/// ```
/// use osculant_hermite::{Hermite, Node};
/// use osculant_rings::Q;
///
/// // f(0) = 1 with f'(0) = 2 → the tangent line 1 + 2x
/// let nodes = vec![Node::with_derivatives(
///     Q::from_integer(0),
///     Q::from_integer(1),
///     [Q::from_integer(2)],
/// )];
/// let coeffs = Hermite::new(&nodes).polynomial_coefficients()?;
/// assert_eq!(coeffs, vec![Q::from_integer(1), Q::from_integer(2)]);
/// # Ok::<(), osculant_hermite::HermiteError>(())
/// ```
pub struct Hermite<'a, S: Scalar> {
    nodes: &'a [Node<S>],
    policy: DuplicatePolicy,
    observer: Option<&'a mut dyn Observer<S>>,
}

impl<'a, S: Scalar> Hermite<'a, S> {
    /// Configures an interpolation over `nodes`.
    ///
    /// The nodes are borrowed and never mutated; derivative order within
    /// each node is significant, input node order is not.
    #[must_use]
    pub fn new(nodes: &'a [Node<S>]) -> Self {
        Self {
            nodes,
            policy: DuplicatePolicy::default(),
            observer: None,
        }
    }

    /// Sets the duplicate-abscissa policy (default:
    /// [`DuplicatePolicy::Warn`]).
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attaches a diagnostic observer for this call.
    #[must_use]
    pub fn observe(mut self, observer: &'a mut dyn Observer<S>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Computes the Newton-form divided-difference coefficients.
    ///
    /// Returns `Ok(None)` for an empty node list: no computation was
    /// performed, which is distinct from interpolating a zero-degree
    /// polynomial.
    ///
    /// # Errors
    ///
    /// [`HermiteError::DuplicateAbscissa`] under
    /// [`DuplicatePolicy::Reject`], or
    /// [`HermiteError::MissingDerivative`] when duplicated data leaves a
    /// confluent cell underdetermined.
    pub fn divided_differences(self) -> Result<Option<Vec<S>>, HermiteError> {
        let mut silent = Silent;
        let observer: &mut dyn Observer<S> = match self.observer {
            Some(observer) => observer,
            None => &mut silent,
        };

        let expanded = prepare(self.nodes, self.policy, observer)?;
        if expanded.is_empty() {
            return Ok(None);
        }
        let pre = divided_differences(&expanded, observer)?;
        Ok(Some(pre))
    }

    /// Computes the fully expanded monomial-basis coefficients, lowest
    /// degree first.
    ///
    /// The result has one coefficient per expanded replica (a degree
    /// `n − 1` polynomial for `n` replicas). An empty node list yields an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// As for [`divided_differences`](Hermite::divided_differences).
    pub fn polynomial_coefficients(self) -> Result<Vec<S>, HermiteError> {
        let mut silent = Silent;
        let observer: &mut dyn Observer<S> = match self.observer {
            Some(observer) => observer,
            None => &mut silent,
        };

        let expanded = prepare(self.nodes, self.policy, observer)?;
        if expanded.is_empty() {
            return Ok(Vec::new());
        }
        let pre = divided_differences(&expanded, observer)?;
        observer.pre_coefficients(&pre);
        let coefficients = newton_to_monomial(&pre, &expanded);
        observer.coefficients(&coefficients);
        Ok(coefficients)
    }
}
