//! # Osculant
//!
//! Generalized Hermite (osculating) polynomial interpolation in Rust.
//!
//! Osculant computes Newton-form divided-difference coefficients and
//! fully expanded monomial-basis coefficients for datasets that may
//! prescribe derivative values alongside node values, over any scalar
//! type implementing the [`rings::Scalar`] contract: floats, exact
//! rationals, or caller-supplied algebraic types.
//!
//! ## Quick Start
//!
//! ```
//! use osculant::prelude::*;
//!
//! // f(0) = 1, f(1) = 2, f(2) = 5 → 1 + x²
//! let nodes = vec![
//!     Node::new(Q::from_integer(0), Q::from_integer(1)),
//!     Node::new(Q::from_integer(1), Q::from_integer(2)),
//!     Node::new(Q::from_integer(2), Q::from_integer(5)),
//! ];
//! let coeffs = Hermite::new(&nodes).polynomial_coefficients()?;
//! assert_eq!(
//!     coeffs,
//!     vec![Q::from_integer(1), Q::from_integer(0), Q::from_integer(1)]
//! );
//! # Ok::<(), HermiteError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use osculant_hermite as hermite;
pub use osculant_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use osculant_hermite::{
        DuplicatePolicy, Hermite, HermiteError, Node, Observer, Silent,
    };
    pub use osculant_rings::{Q, Real, Scalar};
}
