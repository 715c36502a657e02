//! Newton-form to monomial-basis conversion by synthetic expansion.

use crate::node::ExpandedNode;
use osculant_rings::Scalar;

/// Expands Newton-form coefficients over the basis
/// `1, (x − x₀), (x − x₀)(x − x₁), …` into monomial coefficients, lowest
/// degree first.
///
/// The output is seeded with the Newton coefficients themselves: every
/// Newton basis polynomial is monic, so `pre[i]` already is the final
/// degree-`i` contribution of term `i`. The running `basis` vector then
/// tracks only the non-leading coefficients of `Π_{t<i}(x − x_t)`,
/// extended by one linear factor per iteration (synthetic expansion), and
/// each term's weight is folded into the lower degrees additively.
///
/// An empty input yields an empty output.
pub(crate) fn newton_to_monomial<S: Scalar>(pre: &[S], expanded: &[ExpandedNode<S>]) -> Vec<S> {
    let n = pre.len();
    let mut coefficients: Vec<S> = pre.to_vec();
    let mut basis: Vec<S> = Vec::with_capacity(n.saturating_sub(1));

    for i in 1..n {
        let root = -expanded[i - 1].x.clone();

        // Multiply the running product by (x − x_{i−1}) in place, top
        // coefficient first so every read still sees the previous factor.
        let top = match basis.last() {
            Some(last) => last.clone() + root.clone(),
            None => root.clone(),
        };
        for k in (1..basis.len()).rev() {
            basis[k] = basis[k - 1].clone() + root.clone() * basis[k].clone();
        }
        if let Some(first) = basis.first_mut() {
            *first = root * first.clone();
        }
        basis.push(top);

        for (k, b) in basis.iter().enumerate() {
            coefficients[k] = coefficients[k].clone() + pre[i].clone() * b.clone();
        }
    }

    coefficients
}
