//! # Storing of models in memory
//!
//! This module provides the number types and the data structures used to represent models in
//! memory, together with the presolve rules that operate on them.

pub mod linear_program;
pub mod number_types;
