//! Immutable record updates.
//!
//! Element records are never mutated in place: applying a partial override
//! to an existing record produces a fresh one, and the configure functions
//! are just [`merged`](Patch::merged) applied to the kind's defaults.

/// A record that can absorb a partial override into a new copy of itself.
///
/// `Overrides` mirrors the record with every field optional; omitted fields
/// keep the base record's value, so merging into `Default::default()`
/// always yields a fully populated record.
pub trait Patch: Clone {
    type Overrides: Default;

    /// Returns a new record equal to `self` with the overridden fields
    /// replaced. `self` is left untouched.
    fn merged(&self, overrides: Self::Overrides) -> Self;
}

/// Free-function form of [`Patch::merged`], for call sites that read better
/// without method syntax.
pub fn update<T: Patch>(base: &T, overrides: T::Overrides) -> T {
    base.merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Toggle, ToggleOverrides, ToggleValue};

    #[test]
    fn update_leaves_the_base_record_untouched() {
        let base = Toggle::default();
        let next = update(
            &base,
            ToggleOverrides {
                value: Some(ToggleValue::On),
                ..Default::default()
            },
        );

        assert_eq!(base.value, ToggleValue::Off);
        assert_eq!(next.value, ToggleValue::On);
        assert_eq!(next.name, base.name);
    }
}
