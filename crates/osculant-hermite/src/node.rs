//! Interpolation nodes and their expanded working form.

use osculant_rings::Scalar;
use smallvec::SmallVec;

/// One interpolation node: an abscissa, a value, and optional derivative
/// values.
///
/// `derivatives[k]` holds the raw (k+1)-th derivative at `x`, not yet
/// divided by any factorial. The engine never mutates nodes; the same
/// node list can be reused across calls.
#[derive(Clone, Debug)]
pub struct Node<S: Scalar> {
    /// The abscissa.
    pub x: S,
    /// The value at `x`.
    pub y: S,
    /// Raw derivative values at `x`, lowest order first. Most osculating
    /// datasets prescribe at most a couple of orders per abscissa, so the
    /// list is stored inline.
    pub derivatives: SmallVec<[S; 2]>,
}

impl<S: Scalar> Node<S> {
    /// Creates a value-only node.
    #[must_use]
    pub fn new(x: S, y: S) -> Self {
        Self {
            x,
            y,
            derivatives: SmallVec::new(),
        }
    }

    /// Creates a node that also prescribes derivative values.
    ///
    /// `derivatives` lists the raw first, second, … derivative at `x`; a
    /// single value prescribes just the first derivative.
    #[must_use]
    pub fn with_derivatives(x: S, y: S, derivatives: impl IntoIterator<Item = S>) -> Self {
        Self {
            x,
            y,
            derivatives: derivatives.into_iter().collect(),
        }
    }

    /// Number of replicas this node contributes to the expanded dataset.
    #[must_use]
    pub fn multiplicity(&self) -> usize {
        1 + self.derivatives.len()
    }
}

/// One replica of a node in the expanded, sorted working dataset.
///
/// A node with `m` derivative values expands into `1 + m` replicas
/// sharing the same abscissa: replica 0 stands for the value, replica `k`
/// for the k-th derivative. Replicas hold clones of the node's data; the
/// caller's nodes are untouched.
#[derive(Clone, Debug)]
pub struct ExpandedNode<S: Scalar> {
    /// The shared abscissa.
    pub x: S,
    /// The node value; column 0 of the difference table.
    pub y: S,
    /// Replica index within the confluence group: 0 = value, `k` = k-th
    /// derivative.
    pub replica: usize,
    /// The originating node's derivative list, identical across its
    /// replicas.
    pub derivatives: SmallVec<[S; 2]>,
}
