//! # Representing linear and mixed integer programs
//!
//! Models consist of bounded variables, some of which may be required to be integer, and of
//! expressions: linear combinations of those variables with a lower and an upper limit.
pub mod elements;
pub mod model;
