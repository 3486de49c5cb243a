//! # Expressions
//!
//! A linear constraint: a weighted sum of variables that should lie between two optional limits.
//! Presolve rules read the coefficients and limits, and mark expressions redundant or infeasible.
use std::collections::BTreeMap;

use enum_map::{enum_map, EnumMap};

use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::model::appender::{validate_within, Appender, Subject};
use crate::data::linear_program::model::FixedVariables;
use crate::data::linear_program::model::variable::Variable;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef, Signed};

/// A linear combination of variables with optional limits.
///
/// Coefficients are keyed by variable index and are never zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expression<F> {
    name: String,
    linear: BTreeMap<usize, F>,
    limits: EnumMap<BoundDirection, Option<F>>,
    infeasible: bool,
    redundant: bool,
}

impl<F> Expression<F> {
    /// Create an expression without terms and without limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            linear: BTreeMap::new(),
            limits: enum_map! { _ => None },
            infeasible: false,
            redundant: false,
        }
    }

    /// Replace both limits.
    #[must_use]
    pub fn with_limits(mut self, lower: Option<F>, upper: Option<F>) -> Self {
        self.limits[BoundDirection::Lower] = lower;
        self.limits[BoundDirection::Upper] = upper;
        self
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All coefficients, by variable index.
    pub fn linear(&self) -> &BTreeMap<usize, F> {
        &self.linear
    }

    /// Number of variables with a (nonzero) coefficient.
    pub fn count_linear_factors(&self) -> usize {
        self.linear.len()
    }

    /// Indices of the variables in this expression, in increasing order.
    pub fn linear_factor_keys(&self) -> impl Iterator<Item=usize> + '_ {
        self.linear.keys().copied()
    }

    /// Coefficient of a variable, if it appears in the expression.
    pub fn linear_factor(&self, variable: usize) -> Option<&F> {
        self.linear.get(&variable)
    }

    /// Terms of variables that are not in the fixed set.
    pub fn free_factors<'a>(
        &'a self,
        fixed: &'a FixedVariables,
    ) -> impl Iterator<Item=(usize, &'a F)> + 'a {
        self.linear.iter()
            .filter(move |(variable, _)| !fixed.contains(*variable))
            .map(|(&variable, coefficient)| (variable, coefficient))
    }

    /// Limit in a given direction, if there is one.
    pub fn limit(&self, direction: BoundDirection) -> Option<&F> {
        self.limits[direction].as_ref()
    }

    #[allow(missing_docs)]
    pub fn lower_limit(&self) -> Option<&F> {
        self.limit(BoundDirection::Lower)
    }

    #[allow(missing_docs)]
    pub fn upper_limit(&self) -> Option<&F> {
        self.limit(BoundDirection::Upper)
    }

    #[allow(missing_docs)]
    pub fn is_infeasible(&self) -> bool {
        self.infeasible
    }

    #[allow(missing_docs)]
    pub fn set_infeasible(&mut self, infeasible: bool) {
        self.infeasible = infeasible;
    }

    /// Whether the constraint is implied by the variable bounds and can be skipped.
    pub fn is_redundant(&self) -> bool {
        self.redundant
    }

    #[allow(missing_docs)]
    pub fn set_redundant(&mut self, redundant: bool) {
        self.redundant = redundant;
    }
}

impl<OF> Expression<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Set the coefficient of a variable, removing the term when the coefficient is zero.
    pub fn set_linear_factor(&mut self, variable: usize, coefficient: OF) {
        if coefficient.is_zero() {
            self.linear.remove(&variable);
        } else {
            self.linear.insert(variable, coefficient);
        }
    }

    /// Builder version of `set_linear_factor`.
    #[must_use]
    pub fn with_term(mut self, variable: usize, coefficient: OF) -> Self {
        self.set_linear_factor(variable, coefficient);
        self
    }

    /// Whether both limits exist and are equal.
    pub fn is_equality_constraint(&self) -> bool {
        matches!(
            (self.lower_limit(), self.upper_limit()),
            (Some(lower), Some(upper)) if lower == upper
        )
    }

    /// Whether all coefficients of variables that are not fixed are negative.
    ///
    /// Vacuously true when all variables are fixed.
    pub fn is_negative(&self, fixed: &FixedVariables) -> bool {
        self.free_factors(fixed).all(|(_, coefficient)| coefficient.is_negative())
    }

    /// Whether all coefficients of variables that are not fixed are positive.
    ///
    /// Vacuously true when all variables are fixed.
    pub fn is_positive(&self, fixed: &FixedVariables) -> bool {
        self.free_factors(fixed).all(|(_, coefficient)| coefficient.is_positive())
    }

    /// Summed contribution of the fixed variables in this expression.
    ///
    /// Zero if there are none.
    pub fn calculate_fixed_value(&self, fixed: &FixedVariables, variables: &[Variable<OF>]) -> OF {
        self.linear.iter()
            .filter(|(variable, _)| fixed.contains(*variable))
            .filter_map(|(&variable, coefficient)| {
                let value = variables[variable].fixed_value();
                debug_assert!(value.is_some(), "variable {} is in the fixed set without a value", variable);
                value.map(|value| coefficient * value)
            })
            .sum()
    }

    /// Limit in a given direction, minus the contribution of the fixed variables.
    pub fn compensate_limit(
        &self,
        direction: BoundDirection,
        fixed: &FixedVariables,
        variables: &[Variable<OF>],
    ) -> Option<OF> {
        self.limit(direction).map(|limit| limit - self.calculate_fixed_value(fixed, variables))
    }

    #[allow(missing_docs)]
    pub fn compensate_lower_limit(&self, fixed: &FixedVariables, variables: &[Variable<OF>]) -> Option<OF> {
        self.compensate_limit(BoundDirection::Lower, fixed, variables)
    }

    #[allow(missing_docs)]
    pub fn compensate_upper_limit(&self, fixed: &FixedVariables, variables: &[Variable<OF>]) -> Option<OF> {
        self.compensate_limit(BoundDirection::Upper, fixed, variables)
    }

    /// Pin both limits to a single value.
    ///
    /// Used to record the value of an expression that has no free variables left.
    pub fn level(&mut self, value: OF) {
        self.limits[BoundDirection::Lower] = Some(value.clone());
        self.limits[BoundDirection::Upper] = Some(value);
    }

    /// Whether a value lies within the limits of this expression, allowing for `slack`.
    ///
    /// Violations are reported to the appender.
    pub fn validate(&self, value: &OF, slack: &OF, appender: &mut dyn Appender<OF>) -> bool {
        validate_within(
            value,
            self.lower_limit(),
            self.upper_limit(),
            slack,
            Subject::Expression,
            &self.name,
            appender,
        )
    }

    /// Value of the linear combination at a point.
    ///
    /// # Arguments
    ///
    /// * `point`: A value for each variable of the model, by index.
    ///
    /// # Panics
    ///
    /// If the point has no value for a variable of this expression.
    pub fn evaluate(&self, point: &[OF]) -> OF {
        self.linear.iter()
            .map(|(&variable, coefficient)| coefficient * &point[variable])
            .sum()
    }

    /// Whether the value at a point lies within the limits, without slack.
    ///
    /// # Panics
    ///
    /// If the point has no value for a variable of this expression.
    pub fn is_satisfied_by(&self, point: &[OF]) -> bool {
        let value = self.evaluate(point);
        self.lower_limit().is_none_or(|lower| lower <= &value)
            && self.upper_limit().is_none_or(|upper| &value <= upper)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use crate::data::linear_program::model::appender::BoundViolation;
    use crate::data::linear_program::model::expression::Expression;
    use crate::data::linear_program::model::variable::Variable;
    use crate::data::number_types::rational::RationalBig;
    use crate::RB;

    fn variables() -> Vec<Variable<RationalBig>> {
        vec![
            Variable::new("x").with_bounds(Some(RB!(3)), Some(RB!(3))),
            Variable::new("y").with_bounds(Some(RB!(0)), None),
            Variable::new("z").with_bounds(None, None),
        ]
    }

    #[test]
    fn zero_coefficients_are_dropped() {
        let mut expression = Expression::new("c")
            .with_term(0, RB!(1))
            .with_term(1, RB!(0))
            .with_term(2, RB!(-2));
        assert_eq!(expression.count_linear_factors(), 2);
        assert_eq!(expression.linear_factor_keys().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(expression.linear_factor(1), None);

        expression.set_linear_factor(0, RB!(0));
        assert_eq!(expression.count_linear_factors(), 1);
        assert_eq!(expression.linear_factor(2), Some(&RB!(-2)));
    }

    #[test]
    fn sign_of_free_factors() {
        let expression = Expression::new("c")
            .with_term(0, RB!(5))
            .with_term(1, RB!(-1))
            .with_term(2, RB!(-3, 2));
        let none = BTreeSet::new();
        assert!(!expression.is_negative(&none));
        assert!(!expression.is_positive(&none));

        let fixed = BTreeSet::from([0]);
        assert!(expression.is_negative(&fixed));
        assert!(!expression.is_positive(&fixed));

        let all = BTreeSet::from([0, 1, 2]);
        assert!(expression.is_negative(&all));
        assert!(expression.is_positive(&all));
    }

    #[test]
    fn compensation() {
        let variables = variables();
        let expression = Expression::new("c")
            .with_term(0, RB!(2))
            .with_term(1, RB!(1))
            .with_limits(Some(RB!(1)), Some(RB!(10)));

        let none = BTreeSet::new();
        assert_eq!(expression.calculate_fixed_value(&none, &variables), RB!(0));
        assert_eq!(expression.compensate_lower_limit(&none, &variables), Some(RB!(1)));

        let fixed = BTreeSet::from([0]);
        assert_eq!(expression.calculate_fixed_value(&fixed, &variables), RB!(6));
        assert_eq!(expression.compensate_lower_limit(&fixed, &variables), Some(RB!(-5)));
        assert_eq!(expression.compensate_upper_limit(&fixed, &variables), Some(RB!(4)));

        let open = Expression::new("d").with_term(0, RB!(1)).with_limits(None, Some(RB!(0)));
        assert_eq!(open.compensate_lower_limit(&fixed, &variables), None);
        assert_eq!(open.compensate_upper_limit(&fixed, &variables), Some(RB!(-3)));
    }

    #[test]
    fn level_and_validate() {
        let mut expression = Expression::new("c").with_term(0, RB!(1)).with_limits(Some(RB!(5)), Some(RB!(8)));
        assert!(!expression.is_equality_constraint());
        let mut reports = Vec::<BoundViolation<RationalBig>>::new();
        assert!(expression.validate(&RB!(7), &RB!(0), &mut reports));
        assert!(!expression.validate(&RB!(9), &RB!(0), &mut reports));
        assert_eq!(reports.len(), 1);

        expression.level(RB!(7));
        assert!(expression.is_equality_constraint());
        assert_eq!(expression.lower_limit(), Some(&RB!(7)));
    }

    #[test]
    fn evaluate() {
        let expression = Expression::new("c")
            .with_term(0, RB!(1, 2))
            .with_term(2, RB!(-3))
            .with_limits(None, Some(RB!(0)));
        let point = vec![RB!(4), RB!(100), RB!(1)];
        assert_eq!(expression.evaluate(&point), RB!(-1));
        assert!(expression.is_satisfied_by(&point));
        assert!(!expression.is_satisfied_by(&[RB!(8), RB!(0), RB!(1)]));
    }

    #[test]
    #[should_panic]
    fn evaluate_without_value() {
        let expression = Expression::new("c").with_term(3, RB!(1));
        let _value = expression.evaluate(&[RB!(1)]);
    }

    #[test]
    fn flags() {
        let mut expression = Expression::<RationalBig>::new("c");
        assert!(!expression.is_redundant());
        assert!(!expression.is_infeasible());
        expression.set_redundant(true);
        expression.set_infeasible(true);
        assert!(expression.is_redundant());
        assert!(expression.is_infeasible());
    }
}
