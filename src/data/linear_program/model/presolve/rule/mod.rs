//! # Presolving rules
//!
//! These rules, one per submodule, can be applied to a single expression to simplify a model.
//! Rules hold no state: everything they read or change lives in the expression, the variables
//! and the fixed-variable set.
use enum_map::Enum;
use itertools::Itertools;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::model::appender::Appender;
use crate::data::linear_program::model::expression::Expression;
use crate::data::linear_program::model::FixedVariables;
use crate::data::linear_program::model::variable::Variable;
use crate::data::number_types::traits::{IntegerRounding, OrderedField, OrderedFieldRef};

mod opposite_sign;
mod zero_one_two;

/// A presolve rule.
///
/// The set of rules is closed; each variant is paired with its own `simplify` logic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum Rule {
    /// Looks for expressions with at most two variables that are not yet fixed. The limits of the
    /// expression are transferred to the remaining variables.
    ZeroOneTwo,
    /// Checks the sign of the limits and the sign of the coefficients to deduce variables that can
    /// only be zero.
    OppositeSign,
}

impl Rule {
    /// All rules, in no particular order.
    pub const ALL: [Rule; 2] = [Rule::OppositeSign, Rule::ZeroOneTwo];

    /// Rules with a lower priority value are applied first.
    pub fn priority(self) -> u32 {
        match self {
            Rule::ZeroOneTwo => 10,
            Rule::OppositeSign => 20,
        }
    }

    /// Deduplicate and order rules by ascending priority.
    pub fn by_priority(rules: impl IntoIterator<Item=Rule>) -> Vec<Rule> {
        rules.into_iter()
            .unique()
            .sorted_by_key(|rule| rule.priority())
            .collect()
    }

    /// Apply this rule to a single expression.
    ///
    /// Expressions that are already redundant or infeasible are left untouched.
    ///
    /// # Arguments
    ///
    /// * `expression`: Constraint to simplify, its flags might be set.
    /// * `fixed`: Variables that are known to have a single value.
    /// * `context`: Variables of the model, whose bounds might be tightened, and reporting.
    ///
    /// # Return value
    ///
    /// Whether a variable got fixed, and whether the expression was proven infeasible.
    pub fn simplify<OF>(
        self,
        expression: &mut Expression<OF>,
        fixed: &FixedVariables,
        context: &mut Context<'_, OF>,
    ) -> RuleOutcome
    where
        OF: OrderedField + IntegerRounding,
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        if expression.is_redundant() || expression.is_infeasible() {
            return RuleOutcome::default();
        }

        let fixed_any_variable = match self {
            Rule::ZeroOneTwo => context.zero_one_two(expression, fixed),
            Rule::OppositeSign => context.opposite_sign(expression, fixed),
        };

        RuleOutcome {
            fixed_any_variable,
            marked_infeasible: expression.is_infeasible(),
        }
    }
}

/// What a single rule application did.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleOutcome {
    /// At least one variable was leveled.
    pub fixed_any_variable: bool,
    /// The expression can't be satisfied; the model is infeasible.
    pub marked_infeasible: bool,
}

/// Everything of the model that a rule may read or change, besides the expression itself.
pub struct Context<'a, F> {
    /// All variables of the model, by index.
    pub variables: &'a mut [Variable<F>],
    /// Allowed margin when checking values against limits.
    pub slack: &'a F,
    /// Receives reports of rejected values.
    pub appender: &'a mut dyn Appender<F>,
}

impl<'a, F> Context<'a, F> {
    #[allow(missing_docs)]
    pub fn new(variables: &'a mut [Variable<F>], slack: &'a F, appender: &'a mut dyn Appender<F>) -> Self {
        Self { variables, slack, appender }
    }
}

/// Intersect an existing bound with a derived one.
///
/// A missing bound doesn't restrict anything.
fn intersect<OF: OrderedField>(
    direction: BoundDirection,
    existing: Option<OF>,
    derived: Option<OF>,
) -> Option<OF> {
    match (existing, derived) {
        (Some(existing), Some(derived)) => Some(match direction {
            BoundDirection::Lower => existing.max(derived),
            BoundDirection::Upper => existing.min(derived),
        }),
        (existing, derived) => derived.or(existing),
    }
}

/// Round a bound of an integer variable inwards.
fn round_for_integer<OF: IntegerRounding>(direction: BoundDirection, bound: Option<OF>) -> Option<OF> {
    bound.map(|bound| bound.round_to_integer_bound(direction.tightening_rounding()))
}

/// Whether no value lies between two bounds.
fn is_empty_interval<OF: Ord>(lower: Option<&OF>, upper: Option<&OF>) -> bool {
    matches!((lower, upper), (Some(lower), Some(upper)) if lower > upper)
}
