//! Property-based tests over exact rational datasets.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::interpolate::Hermite;
    use crate::node::Node;
    use osculant_rings::{Q, Scalar};

    /// Horner evaluation of monomial coefficients, lowest degree first.
    fn eval(coefficients: &[Q], x: &Q) -> Q {
        let mut acc = Q::zero();
        for c in coefficients.iter().rev() {
            acc = acc * x.clone() + c.clone();
        }
        acc
    }

    /// Formal derivative of monomial coefficients.
    fn derivative(coefficients: &[Q]) -> Vec<Q> {
        coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * Q::from_u64(i as u64))
            .collect()
    }

    // Distinct integer abscissas paired with arbitrary integer values.
    fn value_nodes() -> impl Strategy<Value = Vec<Node<Q>>> {
        proptest::collection::hash_set(-40i64..40, 1..7)
            .prop_flat_map(|xs| {
                let xs: Vec<i64> = xs.into_iter().collect();
                let len = xs.len();
                (Just(xs), proptest::collection::vec(-100i64..100, len))
            })
            .prop_map(|(xs, ys)| {
                xs.into_iter()
                    .zip(ys)
                    .map(|(x, y)| Node::new(Q::from_integer(x), Q::from_integer(y)))
                    .collect()
            })
    }

    // Distinct abscissas, each carrying up to two derivative orders.
    fn osculating_nodes() -> impl Strategy<Value = Vec<Node<Q>>> {
        proptest::collection::hash_set(-20i64..20, 1..5)
            .prop_flat_map(|xs| {
                let xs: Vec<i64> = xs.into_iter().collect();
                let len = xs.len();
                (
                    Just(xs),
                    proptest::collection::vec(
                        (-50i64..50, proptest::collection::vec(-50i64..50, 0..3)),
                        len,
                    ),
                )
            })
            .prop_map(|(xs, data)| {
                xs.into_iter()
                    .zip(data)
                    .map(|(x, (y, ds))| {
                        Node::with_derivatives(
                            Q::from_integer(x),
                            Q::from_integer(y),
                            ds.into_iter().map(Q::from_integer),
                        )
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn polynomial_passes_through_every_value(nodes in value_nodes()) {
            let coefficients = Hermite::new(&nodes).polynomial_coefficients().unwrap();
            prop_assert_eq!(coefficients.len(), nodes.len());
            for node in &nodes {
                prop_assert_eq!(eval(&coefficients, &node.x), node.y.clone());
            }
        }

        #[test]
        fn polynomial_matches_values_and_derivatives(nodes in osculating_nodes()) {
            let coefficients = Hermite::new(&nodes).polynomial_coefficients().unwrap();
            for node in &nodes {
                prop_assert_eq!(eval(&coefficients, &node.x), node.y.clone());

                let mut current = coefficients.clone();
                for want in &node.derivatives {
                    current = derivative(&current);
                    prop_assert_eq!(eval(&current, &node.x), want.clone());
                }
            }
        }

        #[test]
        fn input_order_is_irrelevant(
            (nodes, shuffled) in osculating_nodes()
                .prop_flat_map(|nodes| (Just(nodes.clone()), Just(nodes).prop_shuffle()))
        ) {
            prop_assert_eq!(
                Hermite::new(&nodes).polynomial_coefficients().unwrap(),
                Hermite::new(&shuffled).polynomial_coefficients().unwrap()
            );
        }

        #[test]
        fn single_node_reproduces_its_taylor_coefficients(
            center in -20i64..20,
            y in -50i64..50,
            ds in proptest::collection::vec(-50i64..50, 0..5),
        ) {
            let node = Node::with_derivatives(
                Q::from_integer(center),
                Q::from_integer(y),
                ds.iter().copied().map(Q::from_integer),
            );
            let pre = Hermite::new(std::slice::from_ref(&node))
                .divided_differences()
                .unwrap()
                .unwrap();

            prop_assert_eq!(&pre[0], &Q::from_integer(y));
            let mut factorial = 1u64;
            for (i, &d) in ds.iter().enumerate() {
                factorial *= i as u64 + 1;
                prop_assert_eq!(&pre[i + 1], &Q::from_integer(d).div_scalar(factorial));
            }
        }
    }
}
