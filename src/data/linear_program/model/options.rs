//! # Presolve options
//!
//! Model-wide settings that the presolve rules and the orchestrator read. They can be read from a
//! TOML file, see `crate::io::import_options`.
use num_traits::Zero;

/// Default safeguard against an unexpectedly long fixpoint iteration.
pub const DEFAULT_ITERATION_LIMIT: usize = 1_000;

/// Settings of a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options<F> {
    /// Allowed margin when checking whether a value lies within a limit.
    ///
    /// Non negative. With a zero slack, every check is exact.
    pub slack: F,
    /// Maximum number of presolve passes over all expressions, if any.
    pub iteration_limit: Option<usize>,
}

impl<F: Zero> Default for Options<F> {
    fn default() -> Self {
        Self {
            slack: F::zero(),
            iteration_limit: Some(DEFAULT_ITERATION_LIMIT),
        }
    }
}
