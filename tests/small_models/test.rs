use std::collections::BTreeSet;

use itertools::Itertools;

use relp_presolve::data::linear_program::elements::BoundDirection;
use relp_presolve::data::linear_program::model::{Expression, Model, Variable};
use relp_presolve::data::linear_program::model::appender::{BoundViolation, Subject};
use relp_presolve::data::linear_program::model::presolve::PresolveStatus;
use relp_presolve::data::linear_program::model::presolve::rule::Rule;
use relp_presolve::data::number_types::rational::RationalBig;
use relp_presolve::RB;

use super::{empty_model, init_logging, options};

type T = RationalBig;

/// a + d = 5, 3a + 2b <= 12, c - b >= 0, b + c <= 0
///
/// With `d = 2` fixed, this has the single solution `(3, 0, 0, 2)`.
fn production() -> Model<T> {
    let mut model = empty_model("exact");
    model.add_variable(Variable::new("a").with_bounds(Some(RB!(0)), Some(RB!(10))).integer()).unwrap();
    model.add_variable(Variable::new("b").with_bounds(Some(RB!(0)), Some(RB!(10))).integer()).unwrap();
    model.add_variable(Variable::new("c").with_bounds(Some(RB!(0)), None)).unwrap();
    model.add_variable(Variable::new("d").with_bounds(Some(RB!(2)), Some(RB!(2)))).unwrap();

    model.add_expression(Expression::new("balance")
        .with_term(0, RB!(1)).with_term(3, RB!(1))
        .with_limits(Some(RB!(5)), Some(RB!(5)))
    ).unwrap();
    model.add_expression(Expression::new("capacity")
        .with_term(0, RB!(3)).with_term(1, RB!(2))
        .with_limits(None, Some(RB!(12)))
    ).unwrap();
    model.add_expression(Expression::new("cover")
        .with_term(2, RB!(1)).with_term(1, RB!(-1))
        .with_limits(Some(RB!(0)), None)
    ).unwrap();
    model.add_expression(Expression::new("zero")
        .with_term(1, RB!(1)).with_term(2, RB!(1))
        .with_limits(None, Some(RB!(0)))
    ).unwrap();

    model
}

#[test]
fn options_files() {
    let exact = options("exact");
    assert_eq!(exact.slack, RB!(0));
    assert_eq!(exact.iteration_limit, Some(20));

    let loose = options("loose");
    assert_eq!(loose.slack, RB!(1, 2));
    assert_eq!(loose.iteration_limit, Some(1_000));
}

#[test]
fn production_is_solved_by_presolve() {
    init_logging();
    let original = production();
    let mut model = original.clone();

    let summary = model.presolve();
    assert_eq!(summary.status, PresolveStatus::Reduced);
    assert_eq!(summary.passes, 2);
    assert_eq!(summary.fixed, BTreeSet::from([0, 1, 2, 3]));
    assert_eq!(summary.fixes_by_rule[Rule::ZeroOneTwo], 2);
    assert_eq!(summary.fixes_by_rule[Rule::OppositeSign], 0);
    assert_eq!(summary.redundant, 4);

    let values = model.variables().iter().map(|variable| variable.fixed_value().cloned()).collect::<Vec<_>>();
    assert_eq!(values, vec![Some(RB!(3)), Some(RB!(0)), Some(RB!(0)), Some(RB!(2))]);

    let integers = (0..=10).map(|i| RB!(i)).collect::<Vec<_>>();
    let halves = (0..=8).map(|i| RB!(i, 2)).collect::<Vec<_>>();
    let candidates = [integers.clone(), integers, halves, vec![RB!(2)]];
    let feasible = candidates.iter()
        .map(|values| values.iter().cloned())
        .multi_cartesian_product()
        .filter(|point| original.is_feasible(point))
        .collect::<Vec<_>>();
    assert_eq!(feasible, vec![vec![RB!(3), RB!(0), RB!(0), RB!(2)]]);
    assert!(feasible.iter().all(|point| model.is_feasible(point)));
}

#[test]
fn capacity_too_small() {
    init_logging();
    let mut model = production();
    model.add_expression(Expression::new("minimum b")
        .with_term(1, RB!(1))
        .with_limits(Some(RB!(1)), None)
    ).unwrap();

    let mut reports = Vec::<BoundViolation<T>>::new();
    let summary = model.presolve_with(&mut reports);
    assert!(summary.is_infeasible());
    assert_eq!(summary.status, PresolveStatus::Infeasible { expression: 4 });
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].subject, Subject::Expression);
    assert_eq!(reports[0].name, "minimum b");
    assert_eq!(reports[0].direction, BoundDirection::Lower);
}

#[test]
fn slack_from_file() {
    // 2x = 11 with x in [0, 5]
    let just_above = |options_name| {
        let mut model = empty_model(options_name);
        model.add_variable(Variable::new("x").with_bounds(Some(RB!(0)), Some(RB!(5)))).unwrap();
        model.add_expression(Expression::new("just above")
            .with_term(0, RB!(2))
            .with_limits(Some(RB!(11)), Some(RB!(11)))
        ).unwrap();
        model
    };

    let mut loose = just_above("loose");
    assert_eq!(loose.presolve().status, PresolveStatus::Reduced);
    assert_eq!(loose.variable(0).unwrap().value(), Some(&RB!(11, 2)));

    let mut exact = just_above("exact");
    assert!(exact.presolve().is_infeasible());
}
