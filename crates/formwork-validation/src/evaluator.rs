//! The two evaluation entry points.

use crate::context::ContextRule;
use crate::error::RuleError;
use crate::rule::Rule;

/// Outcome of an evaluation pass: `is_valid` is exactly "no errors".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The trivially-valid outcome: no rules, no errors.
    pub fn passing() -> Self {
        Self::from_errors(Vec::new())
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::passing()
    }
}

/// Evaluates a value against a list of colon-delimited rule specs.
///
/// When the value is empty and no `required` spec is present, nothing is
/// evaluated (or even parsed) and the value passes vacuously; an optional
/// field only has its format checked once it holds something. Otherwise
/// every rule runs in list order and each failing rule appends its name to
/// `errors`.
///
/// A spec that names no known rule, or carries an argument the rule cannot
/// digest, is a configuration defect and comes back as `Err` rather than a
/// failed validation.
pub fn passes_validation(
    value: &str,
    rule_specs: &[String],
) -> Result<Validation, RuleError> {
    if rule_specs.is_empty() {
        return Ok(Validation::passing());
    }

    let required = rule_specs
        .iter()
        .any(|spec| spec.split(':').next() == Some("required"));

    if !required && value.is_empty() {
        return Ok(Validation::passing());
    }

    let mut errors = Vec::new();
    for spec in rule_specs {
        let rule = Rule::parse(spec)?;
        if !rule.evaluate(value) {
            log::trace!("rule `{}` rejected value", rule.name());
            errors.push(rule.name().to_string());
        }
    }

    Ok(Validation::from_errors(errors))
}

/// Evaluates a value against caller-supplied predicates.
///
/// Predicates are anonymous, so a failing one is recorded by its
/// stringified position in the list. This path has no failure mode beyond
/// "the value did not pass".
pub fn passes_context_validation(value: &str, rules: &[ContextRule]) -> Validation {
    let errors = rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| !rule.check(value))
        .map(|(index, _)| index.to_string())
        .collect();

    Validation::from_errors(errors)
}
