//! # Presolving models
//!
//! A `Model` can be presolved by repeatedly applying reduction rules to its expressions. Rules
//! tighten variable bounds, fix variables and mark expressions redundant or infeasible. Presolving
//! stops when a full pass over all expressions fixes no new variable, or as soon as an expression
//! is proven infeasible.
use enum_map::EnumMap;

use crate::data::linear_program::model::appender::Appender;
use crate::data::linear_program::model::expression::Expression;
use crate::data::linear_program::model::{FixedVariables, Model};
use crate::data::number_types::traits::{IntegerRounding, OrderedField, OrderedFieldRef};

pub mod rule;
#[cfg(test)]
mod test;

pub use rule::{Context, Rule, RuleOutcome};

/// Applies a fixed list of rules, ordered by priority, until nothing changes anymore.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Presolver {
    rules: Vec<Rule>,
}

/// How presolving ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PresolveStatus {
    /// A pass over all expressions fixed no new variable.
    Reduced,
    /// An expression can't be satisfied, so the model has no solution.
    Infeasible {
        /// Index of the expression that was proven infeasible.
        expression: usize,
    },
    /// The maximum number of passes was reached.
    IterationLimit,
}

/// Result of presolving a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresolveSummary {
    #[allow(missing_docs)]
    pub status: PresolveStatus,
    /// Number of passes over all expressions that were started.
    pub passes: usize,
    /// Variables with a single value at the end of presolving.
    pub fixed: FixedVariables,
    /// For each rule, how many of its applications fixed at least one variable.
    pub fixes_by_rule: EnumMap<Rule, usize>,
    /// Number of expressions that are redundant at the end of presolving.
    pub redundant: usize,
}

impl PresolveSummary {
    /// Whether the model was proven to have no solution.
    pub fn is_infeasible(&self) -> bool {
        matches!(self.status, PresolveStatus::Infeasible { .. })
    }
}

/// What happened during a single pass.
enum Pass {
    /// The fixed set grew.
    Progress,
    /// The fixed set didn't change.
    Stalled,
    /// An expression, by index, was proven infeasible.
    Infeasible(usize),
}

impl Default for Presolver {
    fn default() -> Self {
        Self::new(Rule::ALL)
    }
}

impl Presolver {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `rules`: Rules to apply, in any order. Duplicates are ignored.
    pub fn new(rules: impl IntoIterator<Item=Rule>) -> Self {
        Self { rules: Rule::by_priority(rules) }
    }

    /// Rules in the order in which they are applied.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Presolve a model in place.
    ///
    /// The initial fixed set consists of all variables that have equal bounds. The model's
    /// iteration limit caps the number of passes.
    ///
    /// # Arguments
    ///
    /// * `model`: Model whose variable bounds and expression flags are updated.
    /// * `appender`: Receives reports of values that were rejected during the rules.
    pub fn presolve<OF>(&self, model: &mut Model<OF>, appender: &mut dyn Appender<OF>) -> PresolveSummary
    where
        OF: OrderedField + IntegerRounding,
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let (variables, expressions, options) = model.parts_mut();

        let mut fixed = variables.iter().enumerate()
            .filter(|(_, variable)| variable.is_equality_constraint())
            .map(|(j, _)| j)
            .collect::<FixedVariables>();
        let mut fixes_by_rule = EnumMap::default();
        let mut context = Context::new(variables, &options.slack, appender);

        let mut passes = 0;
        let status = loop {
            if options.iteration_limit.is_some_and(|limit| passes >= limit) {
                tracing::warn!(passes, "presolve stopped at the iteration limit");
                break PresolveStatus::IterationLimit;
            }
            passes += 1;

            match self.pass(expressions, &mut fixed, &mut context, &mut fixes_by_rule) {
                Pass::Progress => {
                    tracing::debug!(pass = passes, fixed = fixed.len(), "presolve pass fixed variables");
                },
                Pass::Stalled => break PresolveStatus::Reduced,
                Pass::Infeasible(expression) => {
                    tracing::debug!(
                        pass = passes,
                        expression = expressions[expression].name(),
                        "presolve proved the model infeasible"
                    );
                    break PresolveStatus::Infeasible { expression };
                },
            }
        };

        let redundant = expressions.iter().filter(|expression| expression.is_redundant()).count();
        tracing::debug!(?status, passes, fixed = fixed.len(), redundant, "presolve finished");

        PresolveSummary { status, passes, fixed, fixes_by_rule, redundant }
    }

    /// Apply all rules to all expressions that are not yet redundant, once.
    fn pass<OF>(
        &self,
        expressions: &mut [Expression<OF>],
        fixed: &mut FixedVariables,
        context: &mut Context<'_, OF>,
        fixes_by_rule: &mut EnumMap<Rule, usize>,
    ) -> Pass
    where
        OF: OrderedField + IntegerRounding,
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let nr_fixed_before = fixed.len();

        for (index, expression) in expressions.iter_mut().enumerate() {
            if expression.is_infeasible() {
                return Pass::Infeasible(index);
            }

            for &rule in &self.rules {
                if expression.is_redundant() {
                    break;
                }

                let outcome = rule.simplify(expression, fixed, context);
                if outcome.marked_infeasible {
                    return Pass::Infeasible(index);
                }
                if outcome.fixed_any_variable {
                    fixes_by_rule[rule] += 1;
                    // Later rules and expressions in this pass see the new fixed variables.
                    fixed.extend(
                        expression.linear_factor_keys()
                            .filter(|&variable| context.variables[variable].is_equality_constraint()),
                    );
                }
            }
        }

        if fixed.len() > nr_fixed_before {
            Pass::Progress
        } else {
            Pass::Stalled
        }
    }
}
