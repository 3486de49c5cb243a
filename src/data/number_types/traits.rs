//! # Traits
//!
//! A hierarchy of number types is defined. All presolve logic is written against these traits,
//! such that it can be tested with any exact type that satisfies them. Implementations are
//! expected to be exact: no operation may round, except for the explicit integer rounding.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations with Self and with references to Self.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    PartialEq + // Equivalence relation
    Eq +
    PartialOrd +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    Sum +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
}
impl<T> Field for T
where
    T: PartialEq + Eq + PartialOrd + Zero + Neg<Output=T> + One +
        Add<T, Output=T> + for<'r> Add<&'r T, Output=T> + AddAssign<T> + for<'r> AddAssign<&'r T> + Sum +
        Sub<T, Output=T> + for<'r> Sub<&'r T, Output=T> + SubAssign<T> + for<'r> SubAssign<&'r T> +
        Mul<T, Output=T> + for<'r> Mul<&'r T, Output=T> + MulAssign<T> + for<'r> MulAssign<&'r T> +
        Div<T, Output=T> + for<'r> Div<&'r T, Output=T> + DivAssign<T> + for<'r> DivAssign<&'r T> +
        Clone + Display + Debug,
{
}

/// A reference to a variable that is in a `Field`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait FieldRef<Deref>:
    // Equivalence relation
    PartialEq<Self> +
    Neg<Output=Deref> + // Additive inverse
    // First operation
    Add<Deref, Output=Deref> +
    Add<Output=Deref> +
    // First operation inverse
    Sub<Deref, Output=Deref> +
    Sub<Output=Deref> +
    // Second operation
    Mul<Deref, Output=Deref> +
    Mul<Output=Deref> +
    // Second operation inverse
    Div<Deref, Output=Deref> +
    Div<Output=Deref> +
    // Practicalities
    Copy +
    Clone +
    Display +
    Debug +
    Sized +
{
}
impl<T, Deref> FieldRef<Deref> for T
where
    T: PartialEq<T> + Neg<Output=Deref> +
        Add<Deref, Output=Deref> + Add<Output=Deref> +
        Sub<Deref, Output=Deref> + Sub<Output=Deref> +
        Mul<Deref, Output=Deref> + Mul<Output=Deref> +
        Div<Deref, Output=Deref> + Div<Output=Deref> +
        Copy + Clone + Display + Debug + Sized,
{
}

/// Presolve logic is defined over the ordered fields.
pub trait OrderedField: Ord + Field {
}
impl<T: Ord + Field> OrderedField for T {
}

/// A reference to an ordered field.
pub trait OrderedFieldRef<Deref>: Ord + FieldRef<Deref> {
}
impl<T: Ord + FieldRef<Deref>, Deref> OrderedFieldRef<Deref> for T {
}

/// Sign of a number, zero included.
///
/// Zero is unsigned: there is no negative zero in an exact number type.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Sign {
    Positive,
    Zero,
    Negative,
}

/// Sign of a number.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Signed: Ord + Zero {
    /// Compare against the additive identity.
    fn signum(&self) -> Sign {
        match self.cmp(&Self::zero()) {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }
    /// Strictly larger than zero.
    fn is_positive(&self) -> bool {
        self.signum() == Sign::Positive
    }
    /// Strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self.signum() == Sign::Negative
    }
}
impl<T: Ord + Zero> Signed for T {
}

/// Direction in which a value is rounded to an integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// Towards positive infinity, used for lower bounds.
    Ceiling,
    /// Towards negative infinity, used for upper bounds.
    Floor,
}

/// Exact rounding to integers.
///
/// This is the only operation in the hierarchy that changes a value; it is used on purpose to
/// tighten the bounds of integer variables.
pub trait IntegerRounding {
    /// Round to the nearest integer in the given direction.
    ///
    /// Integral values are returned unchanged.
    #[must_use]
    fn round_to_integer_bound(&self, direction: Rounding) -> Self;
    /// Whether the value has no fractional part.
    fn is_integer(&self) -> bool;
}
