//! Toggle records.

use crate::handler::UpdateHandler;
use crate::patch::Patch;

/// A toggle's two positions. Deliberately not a boolean: the record's value
/// reads as the state the control displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleValue {
    On,
    #[default]
    Off,
}

impl ToggleValue {
    pub fn flipped(self) -> ToggleValue {
        match self {
            ToggleValue::On => ToggleValue::Off,
            ToggleValue::Off => ToggleValue::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == ToggleValue::On
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toggle {
    pub disabled: bool,
    pub label: String,
    pub name: String,
    pub on_update: UpdateHandler<Toggle>,
    pub value: ToggleValue,
    pub wrapper_class_name: String,
}

#[derive(Default)]
pub struct ToggleOverrides {
    pub disabled: Option<bool>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub on_update: Option<UpdateHandler<Toggle>>,
    pub value: Option<ToggleValue>,
    pub wrapper_class_name: Option<String>,
}

impl Patch for Toggle {
    type Overrides = ToggleOverrides;

    fn merged(&self, overrides: ToggleOverrides) -> Self {
        Self {
            disabled: overrides.disabled.unwrap_or(self.disabled),
            label: overrides.label.unwrap_or_else(|| self.label.clone()),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_update: overrides.on_update.unwrap_or_else(|| self.on_update.clone()),
            value: overrides.value.unwrap_or(self.value),
            wrapper_class_name: overrides
                .wrapper_class_name
                .unwrap_or_else(|| self.wrapper_class_name.clone()),
        }
    }
}

impl Toggle {
    /// Returns a new record with the opposite value.
    pub fn flipped(&self) -> Toggle {
        self.merged(ToggleOverrides {
            value: Some(self.value.flipped()),
            ..Default::default()
        })
    }
}

/// Merges a partial override into the documented toggle defaults.
pub fn configure_toggle(overrides: ToggleOverrides) -> Toggle {
    Toggle::default().merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_without_overrides_yields_the_defaults() {
        let toggle = configure_toggle(ToggleOverrides::default());
        assert_eq!(toggle, Toggle::default());
        assert_eq!(toggle.value, ToggleValue::Off);
    }

    #[test]
    fn flipped_produces_a_new_record_with_the_opposite_value() {
        let toggle = configure_toggle(ToggleOverrides {
            name: Some("newsletter".into()),
            ..Default::default()
        });

        let next = toggle.flipped();
        assert_eq!(next.value, ToggleValue::On);
        assert_eq!(next.flipped().value, ToggleValue::Off);
        assert_eq!(toggle.value, ToggleValue::Off);
        assert_eq!(next.name, "newsletter");
    }
}
