//! # osculant-hermite
//!
//! Generalized Hermite (osculating) polynomial interpolation.
//!
//! Given nodes pairing an abscissa with a value and, optionally, an
//! ordered list of derivative values, this crate produces either the
//! Newton-form divided-difference coefficients or the fully expanded
//! monomial-basis coefficients of the unique interpolating polynomial.
//! Repeated abscissas (confluence) are handled by substituting the
//! prescribed derivatives into the divided-difference table.
//!
//! Everything is generic over [`osculant_rings::Scalar`], so the same
//! engine runs over floats, exact rationals, or any caller-supplied
//! algebraic type.
//!
//! ## Quick start
//!
//! ```
//! use osculant_hermite::{Hermite, Node};
//! use osculant_rings::Real;
//!
//! let nodes = vec![
//!     Node::new(Real(0.0), Real(1.0)),
//!     Node::new(Real(1.0), Real(2.0)),
//!     Node::new(Real(2.0), Real(5.0)),
//! ];
//!
//! // 1 + x^2, lowest degree first
//! let coeffs = Hermite::new(&nodes).polynomial_coefficients()?;
//! assert_eq!(coeffs, vec![Real(1.0), Real(0.0), Real(1.0)]);
//! # Ok::<(), osculant_hermite::HermiteError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod dataset;
pub mod error;
pub mod interpolate;
pub mod node;
pub mod observe;
pub mod table;

#[cfg(test)]
mod proptests;

pub use dataset::DuplicatePolicy;
pub use error::{DuplicateAbscissa, HermiteError};
pub use interpolate::Hermite;
pub use node::{ExpandedNode, Node};
pub use observe::{Observer, Silent};
