use crate::data::linear_program::model::appender::BoundViolation;
use crate::data::linear_program::model::expression::Expression;
use crate::data::linear_program::model::FixedVariables;
use crate::data::linear_program::model::presolve::rule::{Context, Rule, RuleOutcome};
use crate::data::linear_program::model::variable::Variable;
use crate::data::number_types::rational::RationalBig;
use crate::RB;


type T = RationalBig;

/// Apply a single rule once without slack.
fn apply(
    rule: Rule,
    expression: &mut Expression<T>,
    variables: &mut [Variable<T>],
    fixed: &FixedVariables,
) -> (RuleOutcome, Vec<BoundViolation<T>>) {
    let slack = RB!(0);
    let mut reports = Vec::<BoundViolation<T>>::new();
    let outcome = {
        let mut context = Context::new(variables, &slack, &mut reports);
        rule.simplify(expression, fixed, &mut context)
    };

    (outcome, reports)
}

fn bounded(name: &str, lower: i64, upper: i64) -> Variable<T> {
    Variable::new(name).with_bounds(Some(RB!(lower)), Some(RB!(upper)))
}

fn bounds(variable: &Variable<T>) -> (Option<T>, Option<T>) {
    (variable.lower_limit().cloned(), variable.upper_limit().cloned())
}
