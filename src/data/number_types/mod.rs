//! # Number types
//!
//! Presolve logic is defined over the exact ordered fields described in the `traits` module. The
//! `rational` module provides the arbitrary precision implementation used in practice.
//!
//! A benefit of this approach is that the presolve rules can't silently lose a feasible solution
//! through rounding errors: the only rounding that happens is the explicit rounding of bounds of
//! integer variables.
pub mod traits;
pub mod rational;
