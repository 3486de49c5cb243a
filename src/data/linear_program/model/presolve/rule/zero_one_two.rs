//! # Zero, one or two free variables
//!
//! Triggered when at most two variables of an expression are not yet fixed. The constraint can
//! then be moved, entirely or partially, onto the bounds of those variables.
use enum_map::EnumMap;
use itertools::Itertools;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::model::expression::Expression;
use crate::data::linear_program::model::FixedVariables;
use crate::data::linear_program::model::presolve::rule::{intersect, is_empty_interval, round_for_integer, Context};
use crate::data::linear_program::model::variable::Variable;
use crate::data::number_types::traits::{IntegerRounding, OrderedField, OrderedFieldRef, Signed};

impl<'a, OF> Context<'a, OF>
where
    OF: OrderedField + IntegerRounding,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Dispatch on the number of variables in the expression that are not yet fixed.
    ///
    /// # Return value
    ///
    /// Whether a variable was fixed.
    pub(super) fn zero_one_two(
        &mut self,
        expression: &mut Expression<OF>,
        fixed: &FixedVariables,
    ) -> bool {
        if expression.count_linear_factors() > fixed.len() + 2 {
            // More than two variables are free for sure
            return false;
        }

        let fixed_value = expression.calculate_fixed_value(fixed, self.variables);
        let remaining = expression.free_factors(fixed)
            .map(|(variable, coefficient)| (variable, coefficient.clone()))
            .collect_vec();

        match remaining.as_slice() {
            [] => self.no_free_variables(expression, fixed_value),
            [(variable, coefficient)] => self.one_free_variable(expression, fixed_value, *variable, coefficient),
            [first, second] => self.two_free_variables(expression, &fixed_value, first, second),
            _ => false,
        }
    }

    /// The value of the expression is known, it only needs to be checked against the limits.
    ///
    /// Never fixes a variable.
    fn no_free_variables(&mut self, expression: &mut Expression<OF>, fixed_value: OF) -> bool {
        if expression.validate(&fixed_value, self.slack, self.appender) {
            expression.set_infeasible(false);
            expression.set_redundant(true);
            expression.level(fixed_value);
        } else {
            tracing::trace!(expression = expression.name(), value = %fixed_value, "fixed value outside of limits");
            expression.set_infeasible(true);
            expression.set_redundant(false);
        }

        false
    }

    /// Transfer the limits of the expression to the single remaining variable.
    ///
    /// # Return value
    ///
    /// Whether the variable is fixed afterwards.
    fn one_free_variable(
        &mut self,
        expression: &mut Expression<OF>,
        fixed_value: OF,
        variable: usize,
        coefficient: &OF,
    ) -> bool {
        let target = &mut self.variables[variable];

        let level = match (expression.lower_limit(), expression.upper_limit()) {
            (Some(lower), Some(upper)) if lower == upper => Some(upper.clone()),
            _ => None,
        };

        if let Some(level) = level {
            let solution = (level - &fixed_value) / coefficient;
            let valid = (!target.is_integer() || solution.is_integer())
                && target.validate(&solution, self.slack, self.appender);

            if valid {
                expression.set_infeasible(false);
                expression.set_redundant(true);
                target.level(solution);
            } else {
                expression.set_infeasible(true);
                expression.set_redundant(false);
            }
        } else {
            let solution_bound = |limit: Option<&OF>| limit.map(|limit| (limit - &fixed_value) / coefficient);
            let mut lower_solution = solution_bound(expression.lower_limit());
            let mut upper_solution = solution_bound(expression.upper_limit());
            if coefficient.is_negative() {
                // Dividing by a negative number flips the direction of the inequalities
                std::mem::swap(&mut lower_solution, &mut upper_solution);
            }

            let mut new_lower = intersect(BoundDirection::Lower, target.lower_limit().cloned(), lower_solution);
            let mut new_upper = intersect(BoundDirection::Upper, target.upper_limit().cloned(), upper_solution);
            if target.is_integer() {
                new_lower = round_for_integer(BoundDirection::Lower, new_lower);
                new_upper = round_for_integer(BoundDirection::Upper, new_upper);
            }

            if is_empty_interval(new_lower.as_ref(), new_upper.as_ref()) {
                tracing::trace!(expression = expression.name(), variable = target.name(), "bounds cross");
                expression.set_infeasible(true);
                expression.set_redundant(false);
            } else {
                expression.set_infeasible(false);
                expression.set_redundant(true);
                target.set_lower(new_lower).set_upper(new_upper);
            }
        }

        settle_value(target)
    }

    /// Tighten the bounds of both remaining variables using each other's bounds.
    ///
    /// The expression is not marked redundant: the bounds on each variable separately don't
    /// imply the constraint on their sum.
    ///
    /// # Return value
    ///
    /// Whether either of the variables is fixed afterwards.
    fn two_free_variables(
        &mut self,
        expression: &mut Expression<OF>,
        fixed_value: &OF,
        (first, first_coefficient): &(usize, OF),
        (second, second_coefficient): &(usize, OF),
    ) -> bool {
        let limits = [BoundDirection::Lower, BoundDirection::Upper].into_iter()
            .filter_map(|direction| expression.limit(direction).map(|limit| (direction, limit - fixed_value)))
            .collect_vec();

        let first_bounds = implied_bounds(
            &limits,
            &self.variables[*first], first_coefficient,
            &self.variables[*second], second_coefficient,
        );
        let second_bounds = implied_bounds(
            &limits,
            &self.variables[*second], second_coefficient,
            &self.variables[*first], first_coefficient,
        );

        let crossing = [&first_bounds, &second_bounds].into_iter()
            .any(|bounds| is_empty_interval(bounds[BoundDirection::Lower].as_ref(), bounds[BoundDirection::Upper].as_ref()));
        if crossing {
            tracing::trace!(expression = expression.name(), "derived bounds cross");
            expression.set_infeasible(true);
            return false;
        }

        let mut did_fix_variable = false;
        for (variable, bounds) in [(*first, first_bounds), (*second, second_bounds)] {
            let target = &mut self.variables[variable];
            for (direction, bound) in bounds {
                target.set_bound(direction, bound);
            }
            did_fix_variable |= settle_value(target);
        }

        did_fix_variable
    }
}

/// Bounds of a variable after propagating the limits of a two variable expression.
///
/// Only the current bounds of `other` are used, such that the result doesn't depend on the order
/// in which the two variables are processed.
///
/// # Arguments
///
/// * `limits`: Compensated limits of the expression that exist.
/// * `target`: Variable to derive bounds for, with its coefficient.
/// * `other`: The other free variable in the expression, with its coefficient.
fn implied_bounds<OF>(
    limits: &[(BoundDirection, OF)],
    target: &Variable<OF>,
    target_coefficient: &OF,
    other: &Variable<OF>,
    other_coefficient: &OF,
) -> EnumMap<BoundDirection, Option<OF>>
where
    OF: OrderedField + IntegerRounding,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let mut bounds = EnumMap::from_fn(|direction| target.bound(direction).cloned());

    for (limit_direction, limit) in limits {
        let derived = implied_bound(limit, *limit_direction, target_coefficient, other, other_coefficient);
        if let Some((direction, value)) = derived {
            bounds[direction] = intersect(direction, bounds[direction].take(), Some(value));
        }
    }

    if target.is_integer() {
        for (direction, bound) in bounds.iter_mut() {
            *bound = round_for_integer(direction, bound.take());
        }
    }

    bounds
}

/// Bound on a variable implied by a single limit of `a x + b y`.
///
/// For a lower limit `l`, we have `a x >= l - b y >= l - max(b y)`, where the maximum is attained
/// at the upper bound of `y` if `b` is positive and the lower bound otherwise. Dividing by `a`
/// yields a lower bound on `x` when `a` is positive, an upper bound otherwise. The upper limit is
/// symmetric.
///
/// # Return value
///
/// The direction and value of the bound, or `None` if the needed bound of `y` doesn't exist.
fn implied_bound<OF>(
    limit: &OF,
    limit_direction: BoundDirection,
    target_coefficient: &OF,
    other: &Variable<OF>,
    other_coefficient: &OF,
) -> Option<(BoundDirection, OF)>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let extreme_direction = !(limit_direction ^ sign_direction(other_coefficient));

    other.bound(extreme_direction).map(|extreme| {
        let value = (limit - other_coefficient * extreme) / target_coefficient;
        let direction = limit_direction ^ sign_direction(target_coefficient);
        (direction, value)
    })
}

/// Sign of a nonzero coefficient as a direction, `Lower` being positive.
fn sign_direction<OF: OrderedField>(coefficient: &OF) -> BoundDirection {
    if coefficient.is_positive() {
        BoundDirection::Lower
    } else {
        BoundDirection::Upper
    }
}

/// Set the value of a variable that has equal bounds.
///
/// # Return value
///
/// Whether the variable is fixed.
fn settle_value<OF>(variable: &mut Variable<OF>) -> bool
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    match variable.lower_limit() {
        Some(lower) if variable.is_equality_constraint() => {
            let value = lower.clone();
            variable.set_value(value);
            true
        },
        _ => false,
    }
}
