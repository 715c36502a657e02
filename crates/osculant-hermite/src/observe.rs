//! The observation side-channel.
//!
//! Calls can be instrumented by attaching an [`Observer`]: the engine
//! reports the prepared dataset, every table cell, the coefficient
//! sequences, and non-fatal duplicate-abscissa conditions. Observation is
//! purely diagnostic: observers receive shared references and nothing
//! they do can flow back into the numeric result. With no observer
//! attached the engine stays silent.

use crate::error::DuplicateAbscissa;
use crate::node::ExpandedNode;
use osculant_rings::Scalar;

/// Receives diagnostic events from one interpolation call.
///
/// Every method is a no-op by default; implementors override only the
/// channels they care about.
pub trait Observer<S: Scalar> {
    /// The validated, expanded, sorted working dataset, emitted once
    /// before the difference table is built.
    fn data_prepared(&mut self, expanded: &[ExpandedNode<S>]) {
        let _ = expanded;
    }

    /// One freshly computed cell `(row, col)` of the difference table.
    fn step(&mut self, row: usize, col: usize, value: &S) {
        let _ = (row, col, value);
    }

    /// The Newton-form coefficients, emitted on the monomial path only.
    fn pre_coefficients(&mut self, pre: &[S]) {
        let _ = pre;
    }

    /// The final monomial-basis coefficients.
    fn coefficients(&mut self, coefficients: &[S]) {
        let _ = coefficients;
    }

    /// A non-fatal duplicate-abscissa report, emitted once per offending
    /// pair under [`DuplicatePolicy::Warn`](crate::dataset::DuplicatePolicy::Warn).
    fn duplicate(&mut self, report: &DuplicateAbscissa<S>) {
        let _ = report;
    }
}

/// The do-nothing observer used when none is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<S: Scalar> Observer<S> for Silent {}
