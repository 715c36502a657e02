//! Engine errors and the duplicate-abscissa report payload.

use thiserror::Error;

/// A pair of distinct input nodes sharing one abscissa.
///
/// Indices refer to the caller's original node list, before replica
/// expansion. Under [`DuplicatePolicy::Warn`] the payload is delivered
/// through [`Observer::duplicate`] and the call continues; under
/// [`DuplicatePolicy::Reject`] the same information is carried by
/// [`HermiteError::DuplicateAbscissa`].
///
/// [`DuplicatePolicy::Warn`]: crate::dataset::DuplicatePolicy::Warn
/// [`DuplicatePolicy::Reject`]: crate::dataset::DuplicatePolicy::Reject
/// [`Observer::duplicate`]: crate::observe::Observer::duplicate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateAbscissa<S> {
    /// The shared abscissa value.
    pub value: S,
    /// Index of the earlier node with this abscissa.
    pub first: usize,
    /// Index of the later node with this abscissa.
    pub second: usize,
}

/// Errors that can occur during interpolation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HermiteError {
    /// Two distinct nodes share an abscissa and the duplicate policy
    /// rejects duplicated data.
    #[error("duplicate abscissa {value} shared by nodes {first} and {second}")]
    DuplicateAbscissa {
        /// The shared abscissa, rendered with `Debug`.
        value: String,
        /// Index of the earlier node in the caller's list.
        first: usize,
        /// Index of the later node in the caller's list.
        second: usize,
    },

    /// A confluent table cell needs a derivative order the dataset does
    /// not prescribe.
    ///
    /// Only reachable when distinct nodes share an abscissa under
    /// [`DuplicatePolicy::Warn`](crate::dataset::DuplicatePolicy::Warn):
    /// genuine confluence groups always carry enough derivatives for
    /// every cell they span.
    #[error("confluent cell ({row}, {col}) needs derivative order {order}, which no node prescribes")]
    MissingDerivative {
        /// Row of the underdetermined cell.
        row: usize,
        /// Column of the underdetermined cell.
        col: usize,
        /// The derivative order the cell would consume.
        order: usize,
    },
}
