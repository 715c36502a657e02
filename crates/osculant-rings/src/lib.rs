//! # osculant-rings
//!
//! Coefficient types for the osculant interpolation engine.
//!
//! This crate provides:
//! - The [`Scalar`] trait: the minimal algebraic contract the engine
//!   requires from a coefficient type
//! - [`Q`]: exact arbitrary-precision rationals
//! - [`Real`]: a totally ordered wrapper around any floating-point type
//!
//! The engine itself never commits to a concrete representation; anything
//! implementing [`Scalar`] works, including exact rational, interval or
//! complex-with-total-order arithmetic supplied by downstream crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod reals;
pub mod traits;

pub use rationals::Q;
pub use reals::Real;
pub use traits::Scalar;
