//! Rule evaluation engine for Formwork form elements.
//!
//! Two independent evaluation paths feed an input element's validity:
//! syntactic rules encoded as colon-delimited spec strings
//! (`"isLength:3:15"`) and caller-supplied [`ContextRule`] predicates for
//! checks that cannot be named, such as cross-field comparisons. Both paths
//! produce a [`Validation`] outcome; only a broken rule spec is an error.

mod context;
mod error;
mod evaluator;
mod rule;

pub use context::ContextRule;
pub use error::RuleError;
pub use evaluator::{passes_context_validation, passes_validation, Validation};
pub use rule::Rule;

pub mod prelude {
    pub use crate::{
        passes_context_validation, passes_validation, ContextRule, Rule, RuleError, Validation,
    };
}
