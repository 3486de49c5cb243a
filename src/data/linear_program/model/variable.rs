//! # Variables
//!
//! A bounded decision variable. During presolve, bounds only ever get tighter.
use enum_map::{enum_map, EnumMap};

use crate::data::linear_program::elements::{BoundDirection, VariableType};
use crate::data::linear_program::model::appender::{validate_within, Appender, Subject};
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

/// A decision variable with optional limits.
///
/// An absent limit means that the variable is unbounded in that direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable<F> {
    name: String,
    variable_type: VariableType,
    bounds: EnumMap<BoundDirection, Option<F>>,
    value: Option<F>,
}

impl<F> Variable<F> {
    /// Create a new, continuous and unbounded variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable_type: VariableType::Continuous,
            bounds: enum_map! { _ => None },
            value: None,
        }
    }

    /// Replace both limits.
    #[must_use]
    pub fn with_bounds(mut self, lower: Option<F>, upper: Option<F>) -> Self {
        self.bounds[BoundDirection::Lower] = lower;
        self.bounds[BoundDirection::Upper] = upper;
        self
    }

    /// Mark the variable as integer.
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.variable_type = VariableType::Integer;
        self
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }

    /// Whether only integer values are allowed.
    pub fn is_integer(&self) -> bool {
        self.variable_type == VariableType::Integer
    }

    /// Limit in a given direction, if there is one.
    pub fn bound(&self, direction: BoundDirection) -> Option<&F> {
        self.bounds[direction].as_ref()
    }

    #[allow(missing_docs)]
    pub fn lower_limit(&self) -> Option<&F> {
        self.bound(BoundDirection::Lower)
    }

    #[allow(missing_docs)]
    pub fn upper_limit(&self) -> Option<&F> {
        self.bound(BoundDirection::Upper)
    }

    /// Replace a limit.
    ///
    /// No check is done on whether the new limit is tighter; callers intersect first.
    pub fn set_bound(&mut self, direction: BoundDirection, bound: Option<F>) -> &mut Self {
        self.bounds[direction] = bound;
        self
    }

    #[allow(missing_docs)]
    pub fn set_lower(&mut self, bound: Option<F>) -> &mut Self {
        self.set_bound(BoundDirection::Lower, bound)
    }

    #[allow(missing_docs)]
    pub fn set_upper(&mut self, bound: Option<F>) -> &mut Self {
        self.set_bound(BoundDirection::Upper, bound)
    }

    /// Current value, if one was determined.
    pub fn value(&self) -> Option<&F> {
        self.value.as_ref()
    }

    #[allow(missing_docs)]
    pub fn set_value(&mut self, value: F) {
        self.value = Some(value);
    }
}

impl<OF> Variable<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Fix the variable to a single value.
    ///
    /// Sets both limits and the value at once.
    pub fn level(&mut self, value: OF) {
        self.bounds[BoundDirection::Lower] = Some(value.clone());
        self.bounds[BoundDirection::Upper] = Some(value.clone());
        self.value = Some(value);
    }

    /// Whether both limits exist and are equal.
    pub fn is_equality_constraint(&self) -> bool {
        matches!(
            (self.lower_limit(), self.upper_limit()),
            (Some(lower), Some(upper)) if lower == upper
        )
    }

    /// The single value this variable can take, if it is fixed.
    ///
    /// When the variable is not leveled, a value that was set explicitly is used.
    pub fn fixed_value(&self) -> Option<&OF> {
        match (self.lower_limit(), self.upper_limit()) {
            (Some(lower), Some(upper)) if lower == upper => Some(lower),
            _ => self.value(),
        }
    }

    /// Whether the variable admits a feasible value (the upper bound is not below the lower bound).
    pub fn has_feasible_value(&self) -> bool {
        match (self.lower_limit(), self.upper_limit()) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }

    /// Whether a value lies within the limits of this variable, allowing for `slack`.
    ///
    /// Violations are reported to the appender.
    pub fn validate(&self, value: &OF, slack: &OF, appender: &mut dyn Appender<OF>) -> bool {
        validate_within(
            value,
            self.lower_limit(),
            self.upper_limit(),
            slack,
            Subject::Variable,
            &self.name,
            appender,
        )
    }
}
