//! # Exact presolve
//!
//! Before a simplex or branch-and-bound solver runs, cheap algebraic rules scan each constraint of
//! a linear or mixed integer model. They tighten variable bounds, fix variables to exact values and
//! mark constraints as redundant or infeasible, without ever cutting off a feasible solution. All
//! arithmetic is done with arbitrary precision rational numbers.
#![warn(missing_docs)]

pub mod data;
pub mod io;
