//! Dataset preparation: duplicate scan, replica expansion, stable sort.

use crate::error::{DuplicateAbscissa, HermiteError};
use crate::node::{ExpandedNode, Node};
use crate::observe::Observer;
use osculant_rings::Scalar;
use std::cmp::Ordering;

/// What to do when two distinct nodes share an abscissa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Report each offending pair through
    /// [`Observer::duplicate`](crate::observe::Observer::duplicate) and
    /// keep going with the duplicated data. Any result is mathematically
    /// meaningless, and the table later fails with
    /// [`HermiteError::MissingDerivative`](crate::error::HermiteError::MissingDerivative)
    /// once a confluent cell asks for a derivative order the merged group
    /// does not prescribe. This is the default.
    #[default]
    Warn,
    /// Fail fast with
    /// [`HermiteError::DuplicateAbscissa`](crate::error::HermiteError::DuplicateAbscissa)
    /// before any computation.
    Reject,
}

/// Validates, expands, and sorts the caller's nodes into the working list
/// the table builder consumes.
///
/// Duplicate detection runs over the *unexpanded* list: equality is the
/// scalar type's total order, derivative content does not participate.
pub(crate) fn prepare<S: Scalar>(
    nodes: &[Node<S>],
    policy: DuplicatePolicy,
    observer: &mut dyn Observer<S>,
) -> Result<Vec<ExpandedNode<S>>, HermiteError> {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].x.total_cmp(&nodes[j].x) != Ordering::Equal {
                continue;
            }
            match policy {
                DuplicatePolicy::Warn => observer.duplicate(&DuplicateAbscissa {
                    value: nodes[i].x.clone(),
                    first: i,
                    second: j,
                }),
                DuplicatePolicy::Reject => {
                    return Err(HermiteError::DuplicateAbscissa {
                        value: format!("{:?}", nodes[i].x),
                        first: i,
                        second: j,
                    })
                }
            }
        }
    }

    let total: usize = nodes.iter().map(Node::multiplicity).sum();
    let mut expanded = Vec::with_capacity(total);
    for node in nodes {
        for replica in 0..node.multiplicity() {
            expanded.push(ExpandedNode {
                x: node.x.clone(),
                y: node.y.clone(),
                replica,
                derivatives: node.derivatives.clone(),
            });
        }
    }

    // Stability is load-bearing: replicas of one node enter in value,
    // first-derivative, second-derivative order and must stay contiguous
    // in that order for the confluent recurrence. `slice::sort_by` is
    // documented stable.
    expanded.sort_by(|a, b| a.x.total_cmp(&b.x));

    observer.data_prepared(&expanded);
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Silent;
    use osculant_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn expands_and_sorts_by_abscissa() {
        let nodes = vec![
            Node::with_derivatives(q(3), q(9), [q(6)]),
            Node::new(q(1), q(1)),
            Node::new(q(2), q(4)),
        ];
        let expanded = prepare(&nodes, DuplicatePolicy::Warn, &mut Silent).unwrap();

        let xs: Vec<Q> = expanded.iter().map(|e| e.x.clone()).collect();
        assert_eq!(xs, vec![q(1), q(2), q(3), q(3)]);
        assert_eq!(expanded.len(), 4);
    }

    #[test]
    fn replicas_stay_ordered_within_a_confluence_group() {
        let nodes = vec![
            Node::new(q(5), q(0)),
            Node::with_derivatives(q(2), q(1), [q(7), q(8), q(9)]),
        ];
        let expanded = prepare(&nodes, DuplicatePolicy::Warn, &mut Silent).unwrap();

        let replicas: Vec<usize> = expanded.iter().map(|e| e.replica).collect();
        assert_eq!(replicas, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn reports_each_duplicate_pair_once() {
        struct Count(Vec<(usize, usize)>);
        impl Observer<Q> for Count {
            fn duplicate(&mut self, report: &DuplicateAbscissa<Q>) {
                self.0.push((report.first, report.second));
            }
        }

        let nodes = vec![
            Node::new(q(1), q(0)),
            Node::new(q(2), q(0)),
            Node::new(q(1), q(5)),
            Node::new(q(1), q(6)),
        ];
        let mut count = Count(Vec::new());
        prepare(&nodes, DuplicatePolicy::Warn, &mut count).unwrap();

        assert_eq!(count.0, vec![(0, 2), (0, 3), (2, 3)]);
    }

    #[test]
    fn reject_policy_fails_fast() {
        let nodes = vec![Node::new(q(4), q(0)), Node::new(q(4), q(1))];
        let err = prepare(&nodes, DuplicatePolicy::Reject, &mut Silent).unwrap_err();
        assert!(matches!(
            err,
            HermiteError::DuplicateAbscissa { first: 0, second: 1, .. }
        ));
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let expanded = prepare::<Q>(&[], DuplicatePolicy::Warn, &mut Silent).unwrap();
        assert!(expanded.is_empty());
    }
}
