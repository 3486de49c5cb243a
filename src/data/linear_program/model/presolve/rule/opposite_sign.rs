//! # Opposite sign
//!
//! When all free variables of an expression have coefficients of the same sign, and the
//! compensated limit on the other side of zero requires the sum to have the opposite sign, the
//! free variables can only be zero. If the limit is strictly on the other side of zero, the
//! expression can't be satisfied at all.
use itertools::Itertools;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::model::expression::Expression;
use crate::data::linear_program::model::FixedVariables;
use crate::data::linear_program::model::presolve::rule::Context;
use crate::data::number_types::traits::{IntegerRounding, OrderedField, OrderedFieldRef, Sign, Signed};

impl<'a, OF> Context<'a, OF>
where
    OF: OrderedField + IntegerRounding,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Force free variables to zero, or prove infeasibility, based on signs.
    ///
    /// Both the lower and the upper limit are checked, independently of each other.
    ///
    /// # Return value
    ///
    /// Whether at least one variable was fixed.
    pub(super) fn opposite_sign(
        &mut self,
        expression: &mut Expression<OF>,
        fixed: &FixedVariables,
    ) -> bool {
        let mut did_fix_variable = false;

        let lower = expression.compensate_lower_limit(fixed, self.variables);
        let upper = expression.compensate_upper_limit(fixed, self.variables);

        // `<a, x> >= l >= 0` with all `a <= 0`
        if let Some(lower) = lower {
            if !lower.is_negative() && expression.is_negative(fixed) {
                did_fix_variable |= self.force_to_zero(expression, fixed, lower.signum(), BoundDirection::Lower);
            }
        }

        // `<a, x> <= u <= 0` with all `a >= 0`
        if let Some(upper) = upper {
            if !upper.is_positive() && expression.is_positive(fixed) {
                did_fix_variable |= self.force_to_zero(expression, fixed, upper.signum(), BoundDirection::Upper);
            }
        }

        did_fix_variable
    }

    /// Level all free variables at zero if the limit is zero, otherwise mark infeasible.
    ///
    /// # Arguments
    ///
    /// * `limit_sign`: Sign of the compensated limit, zero or on the side opposite to the
    /// coefficients.
    /// * `direction`: Which limit of the expression is used, for reporting only.
    fn force_to_zero(
        &mut self,
        expression: &mut Expression<OF>,
        fixed: &FixedVariables,
        limit_sign: Sign,
        direction: BoundDirection,
    ) -> bool {
        if limit_sign != Sign::Zero {
            tracing::trace!(expression = expression.name(), ?direction, "limit can't be reached");
            expression.set_infeasible(true);
            return false;
        }

        let mut did_fix_variable = false;
        let free_variables = expression.free_factors(fixed)
            .map(|(variable, _)| variable)
            .collect_vec();
        for variable in free_variables {
            let zero = OF::zero();
            if self.variables[variable].validate(&zero, self.slack, self.appender) {
                tracing::trace!(
                    expression = expression.name(),
                    variable = self.variables[variable].name(),
                    "variable can only be zero"
                );
                self.variables[variable].level(zero);
                did_fix_variable = true;
            } else {
                // A later valid variable doesn't make the expression feasible again.
                expression.set_infeasible(true);
            }
        }

        expression.set_redundant(true);

        did_fix_variable
    }
}
