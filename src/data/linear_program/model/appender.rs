//! # Diagnostics
//!
//! Presolve reports values that fall outside of the limits of a variable or expression to an
//! `Appender`. Reports are informational: no decision depends on what an appender does with them.
use std::fmt;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

/// Kind of model element that a value was checked against.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Subject {
    Variable,
    Expression,
}

/// A value was found outside of a limit, even after allowing for the slack tolerance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundViolation<F> {
    /// Whether a variable or an expression was checked.
    pub subject: Subject,
    /// Name of the variable or expression.
    pub name: String,
    /// The rejected value.
    pub value: F,
    /// Which of the two limits was violated.
    pub direction: BoundDirection,
    /// Value of the violated limit, without slack.
    pub limit: F,
}

impl<F: fmt::Display> fmt::Display for BoundViolation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (subject, relation) = match (self.subject, self.direction) {
            (Subject::Variable, BoundDirection::Lower) => ("variable", "below lower"),
            (Subject::Variable, BoundDirection::Upper) => ("variable", "above upper"),
            (Subject::Expression, BoundDirection::Lower) => ("expression", "below lower"),
            (Subject::Expression, BoundDirection::Upper) => ("expression", "above upper"),
        };
        write!(f, "{} {}: {} is {} limit {}", subject, self.name, self.value, relation, self.limit)
    }
}

/// Diagnostics sink.
pub trait Appender<F> {
    /// Receive a single report.
    fn append(&mut self, violation: BoundViolation<F>);
}

/// Forwards reports to the `tracing` ecosystem at debug level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingAppender;

impl<F: fmt::Display> Appender<F> for TracingAppender {
    fn append(&mut self, violation: BoundViolation<F>) {
        tracing::debug!(
            subject = ?violation.subject,
            name = %violation.name,
            value = %violation.value,
            limit = %violation.limit,
            "{}", violation
        );
    }
}

/// Collects all reports, such that they can be inspected afterwards.
impl<F> Appender<F> for Vec<BoundViolation<F>> {
    fn append(&mut self, violation: BoundViolation<F>) {
        self.push(violation);
    }
}

/// Discards all reports.
impl<F> Appender<F> for () {
    fn append(&mut self, _violation: BoundViolation<F>) {
    }
}

/// Check whether a value lies within limits, widened by the slack.
///
/// Reports the first violated limit, if any.
pub(super) fn validate_within<OF>(
    value: &OF,
    lower: Option<&OF>,
    upper: Option<&OF>,
    slack: &OF,
    subject: Subject,
    name: &str,
    appender: &mut dyn Appender<OF>,
) -> bool
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let violated = if lower.is_some_and(|lower| value < &(lower - slack)) {
        lower.map(|limit| (BoundDirection::Lower, limit))
    } else if upper.is_some_and(|upper| value > &(upper + slack)) {
        upper.map(|limit| (BoundDirection::Upper, limit))
    } else {
        None
    };

    match violated {
        None => true,
        Some((direction, limit)) => {
            appender.append(BoundViolation {
                subject,
                name: name.to_string(),
                value: value.clone(),
                direction,
                limit: limit.clone(),
            });
            false
        },
    }
}
