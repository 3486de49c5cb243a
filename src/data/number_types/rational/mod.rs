//! # Rational numbers
//!
//! Primary way to do exact computation. All bound arithmetic in presolve happens in this type.
//!
//! At the moment, this is wrapping the `num::BigRational` type, following the newtype pattern.
//! This is needed because some of the impl's in this module are not provided by `num`, such as the
//! parsing of decimal literals and the explicit integer rounding.
use std::str::FromStr;

use num::{BigInt, BigRational};
use num_traits::{FromPrimitive, ToPrimitive};
use thiserror::Error;

use crate::data::number_types::traits::{IntegerRounding, Rounding};

/// Largest power of ten that a decimal literal may scale by.
const MAX_DECIMAL_SHIFT: u32 = 10_000;

mod wrapping;
mod macros;
#[cfg(test)]
mod test;

/// An arbitrary precision rational type.
///
/// Zero has no sign, and there are no representations for infinity or "not a number". Absent
/// limits are modelled with `Option` instead.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct RationalBig(BigRational);

impl RationalBig {
    /// Create a new instance by converting the two provided numbers into arbitrary size ints.
    ///
    /// # Panics
    ///
    /// If the denominator is zero.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(numer.into(), denom.into()))
    }

    /// Wrap an inner `num::BigRational`.
    fn wrap(inner: BigRational) -> Self {
        Self(inner)
    }

    /// Closest `f64` value, meant for reporting only.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl IntegerRounding for RationalBig {
    fn round_to_integer_bound(&self, direction: Rounding) -> Self {
        match direction {
            Rounding::Ceiling => Self::wrap(self.0.ceil()),
            Rounding::Floor => Self::wrap(self.0.floor()),
        }
    }

    fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
}

impl From<i64> for RationalBig {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(value.into()))
    }
}

impl FromPrimitive for RationalBig {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self(BigRational::from_integer(n.into())))
    }

    /// Exact conversion of the binary value; `NaN` and the infinities have no representation.
    fn from_f64(n: f64) -> Option<Self> {
        BigRational::from_float(n).map(Self)
    }
}

/// A literal could not be read as a rational number.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("can't parse \"{literal}\" as a rational number")]
pub struct ParseRationalError {
    literal: String,
}

impl ParseRationalError {
    fn new(literal: &str) -> Self {
        Self { literal: literal.to_string() }
    }
}

/// Accepts integers (`"-3"`), fractions (`"3/4"`) and decimals (`"0.125"`, `"1e-6"`, `"2.5E3"`).
///
/// Decimals that scale by more than `10^10000` are rejected.
impl FromStr for RationalBig {
    type Err = ParseRationalError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let trimmed = literal.trim();
        if trimmed.contains('/') {
            return BigRational::from_str(trimmed)
                .map(Self)
                .map_err(|_| ParseRationalError::new(literal));
        }

        let (mantissa, exponent) = match trimmed.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                let exponent = exponent.parse::<i32>().map_err(|_| ParseRationalError::new(literal))?;
                (mantissa, exponent)
            },
            None => (trimmed, 0),
        };

        let (integer_part, fraction_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let digits_valid = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        let unsigned_integer_part = integer_part.trim_start_matches(['-', '+']);
        if unsigned_integer_part.len() + 1 < integer_part.len()
            || !digits_valid(unsigned_integer_part)
            || !digits_valid(fraction_part)
            || unsigned_integer_part.is_empty() && fraction_part.is_empty() {
            return Err(ParseRationalError::new(literal));
        }

        let digits = format!("{}{}", integer_part, fraction_part);
        let numerator = BigInt::from_str(&digits).map_err(|_| ParseRationalError::new(literal))?;
        let shift = i32::try_from(fraction_part.len()).ok()
            .and_then(|nr_decimals| exponent.checked_sub(nr_decimals))
            .filter(|shift| shift.unsigned_abs() <= MAX_DECIMAL_SHIFT)
            .ok_or_else(|| ParseRationalError::new(literal))?;
        let power = num_traits::pow(BigInt::from(10), shift.unsigned_abs() as usize);
        let value = if shift >= 0 {
            BigRational::from_integer(numerator * power)
        } else {
            BigRational::new(numerator, power)
        };

        Ok(Self(value))
    }
}
