//! Caller-supplied predicate rules.

use std::fmt;
use std::rc::Rc;

/// A validation predicate over the raw value, for checks that cannot be
/// expressed as a named rule spec (cross-field comparisons, lookahead-style
/// composites, and the like).
///
/// Context rules are anonymous; when one fails, it is reported by its
/// position in the rule list rather than by name.
#[derive(Clone)]
pub struct ContextRule(Rc<dyn Fn(&str) -> bool>);

impl ContextRule {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self(Rc::new(predicate))
    }

    /// Runs the predicate against a value.
    pub fn check(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl PartialEq for ContextRule {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ContextRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextRule(..)")
    }
}
