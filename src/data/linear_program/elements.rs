//! # Building blocks to describe models.
use std::ops::{BitXor, Not};

use enum_map::Enum;

use crate::data::number_types::traits::Rounding;

/// Direction of a bound.
///
/// Used for both the limits of a variable and the limits of an expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum BoundDirection {
    /// In the case of a variable, `x >= b`.
    Lower,
    /// In the case of a variable, `x <= b`.
    Upper,
}

impl BoundDirection {
    /// Rounding that tightens a bound of an integer variable in this direction.
    ///
    /// Lower bounds are rounded up, upper bounds are rounded down.
    #[must_use]
    pub fn tightening_rounding(self) -> Rounding {
        match self {
            BoundDirection::Lower => Rounding::Ceiling,
            BoundDirection::Upper => Rounding::Floor,
        }
    }
}

impl Not for BoundDirection {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// Analogue to multiplying signs of values, with `Lower` as the positive sign.
///
/// Used mostly in presolving.
impl BitXor for BoundDirection {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self::Output {
        match (self, other) {
            (Self::Lower, Self::Upper) | (Self::Upper, Self::Lower) => Self::Upper,
            (Self::Lower, Self::Lower) | (Self::Upper, Self::Upper) => Self::Lower,
        }
    }
}

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VariableType {
    #[default]
    Continuous,
    Integer,
}

impl Not for VariableType {
    type Output = VariableType;

    fn not(self) -> VariableType {
        match self {
            VariableType::Continuous => VariableType::Integer,
            VariableType::Integer => VariableType::Continuous,
        }
    }
}
