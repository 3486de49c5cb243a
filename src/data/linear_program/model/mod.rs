//! # Models
//!
//! A model owns the variables and the expressions (constraints) of a linear or mixed integer
//! problem, together with the options that presolve reads. Variables and expressions are
//! referred to by the index that they received when they were added.
use std::collections::BTreeSet;

use thiserror::Error;

use crate::data::linear_program::model::appender::{Appender, TracingAppender};
use crate::data::linear_program::model::options::Options;
use crate::data::linear_program::model::presolve::{PresolveSummary, Presolver};
use crate::data::number_types::traits::{IntegerRounding, OrderedField, OrderedFieldRef};

pub use expression::Expression;
pub use variable::Variable;

mod variable;
mod expression;
pub mod appender;
pub mod options;
pub mod presolve;


/// Indices of variables that are known to have a single value.
pub type FixedVariables = BTreeSet<usize>;

/// A model could not be built as requested.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ModelError {
    /// An expression refers to a variable that wasn't added to the model.
    #[error("expression \"{expression}\" refers to unknown variable {variable}")]
    UnknownVariable {
        #[allow(missing_docs)]
        expression: String,
        /// Index of the unknown variable.
        variable: usize,
    },
    /// The lower bound of a variable is larger than its upper bound.
    #[error("variable \"{0}\" has a lower bound above its upper bound")]
    InconsistentVariableBounds(String),
    /// The lower limit of an expression is larger than its upper limit.
    #[error("expression \"{0}\" has a lower limit above its upper limit")]
    InconsistentExpressionLimits(String),
}

/// Variables, expressions and options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Model<F> {
    variables: Vec<Variable<F>>,
    expressions: Vec<Expression<F>>,
    options: Options<F>,
}

impl<F> Model<F> {
    /// Create an empty model.
    pub fn new(options: Options<F>) -> Self {
        Self {
            variables: Vec::new(),
            expressions: Vec::new(),
            options,
        }
    }

    #[allow(missing_docs)]
    pub fn variable(&self, index: usize) -> Option<&Variable<F>> {
        self.variables.get(index)
    }

    #[allow(missing_docs)]
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    #[allow(missing_docs)]
    pub fn expression(&self, index: usize) -> Option<&Expression<F>> {
        self.expressions.get(index)
    }

    #[allow(missing_docs)]
    pub fn expressions(&self) -> &[Expression<F>] {
        &self.expressions
    }

    #[allow(missing_docs)]
    pub fn options(&self) -> &Options<F> {
        &self.options
    }

    /// Borrow the parts of the model separately, such that the variables can be changed while the
    /// expressions are being iterated over.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Variable<F>], &mut [Expression<F>], &Options<F>) {
        (&mut self.variables, &mut self.expressions, &self.options)
    }
}

impl<OF> Model<OF>
where
    OF: OrderedField + IntegerRounding,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Add a variable.
    ///
    /// # Return value
    ///
    /// The index of the new variable.
    ///
    /// # Errors
    ///
    /// If the lower bound of the variable is above its upper bound.
    pub fn add_variable(&mut self, variable: Variable<OF>) -> Result<usize, ModelError> {
        if !variable.has_feasible_value() {
            return Err(ModelError::InconsistentVariableBounds(variable.name().to_string()));
        }

        self.variables.push(variable);
        Ok(self.variables.len() - 1)
    }

    /// Add an expression.
    ///
    /// # Return value
    ///
    /// The index of the new expression.
    ///
    /// # Errors
    ///
    /// If the expression refers to a variable that is not in the model, or if its lower limit is
    /// above its upper limit.
    pub fn add_expression(&mut self, expression: Expression<OF>) -> Result<usize, ModelError> {
        if let Some(variable) = expression.linear_factor_keys().find(|&j| j >= self.variables.len()) {
            return Err(ModelError::UnknownVariable {
                expression: expression.name().to_string(),
                variable,
            });
        }
        if let (Some(lower), Some(upper)) = (expression.lower_limit(), expression.upper_limit()) {
            if lower > upper {
                return Err(ModelError::InconsistentExpressionLimits(expression.name().to_string()));
            }
        }

        self.expressions.push(expression);
        Ok(self.expressions.len() - 1)
    }

    /// Variables that currently have equal bounds.
    pub fn fixed_variables(&self) -> FixedVariables {
        self.variables.iter().enumerate()
            .filter(|(_, variable)| variable.is_equality_constraint())
            .map(|(j, _)| j)
            .collect()
    }

    /// Whether a point satisfies all bounds, integrality requirements and expressions exactly.
    ///
    /// # Arguments
    ///
    /// * `point`: A value for each variable, by index. Points of the wrong length are never
    /// feasible.
    pub fn is_feasible(&self, point: &[OF]) -> bool {
        point.len() == self.variables.len()
            && self.variables.iter().zip(point).all(|(variable, value)| {
                variable.lower_limit().is_none_or(|lower| lower <= value)
                    && variable.upper_limit().is_none_or(|upper| value <= upper)
                    && (!variable.is_integer() || value.is_integer())
            })
            && self.expressions.iter().all(|expression| expression.is_satisfied_by(point))
    }

    /// Presolve with all rules, logging rejected values through `tracing`.
    pub fn presolve(&mut self) -> PresolveSummary {
        self.presolve_with(&mut TracingAppender)
    }

    /// Presolve with all rules.
    ///
    /// # Arguments
    ///
    /// * `appender`: Receives reports of values that were rejected by a rule.
    pub fn presolve_with(&mut self, appender: &mut dyn Appender<OF>) -> PresolveSummary {
        Presolver::default().presolve(self, appender)
    }
}
