//! Radio group records.

use super::Choice;
use crate::handler::UpdateHandler;
use crate::patch::Patch;

/// A radio group: at most one of `values` is selected at a time.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Radio {
    pub disabled: bool,
    pub name: String,
    pub on_change: UpdateHandler<Radio>,
    pub selected_value: Option<String>,
    pub values: Vec<Choice>,
    pub wrapper_class_name: String,
}

#[derive(Default)]
pub struct RadioOverrides {
    pub disabled: Option<bool>,
    pub name: Option<String>,
    pub on_change: Option<UpdateHandler<Radio>>,
    pub selected_value: Option<Option<String>>,
    pub values: Option<Vec<Choice>>,
    pub wrapper_class_name: Option<String>,
}

impl Patch for Radio {
    type Overrides = RadioOverrides;

    fn merged(&self, overrides: RadioOverrides) -> Self {
        Self {
            disabled: overrides.disabled.unwrap_or(self.disabled),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_change: overrides.on_change.unwrap_or_else(|| self.on_change.clone()),
            selected_value: overrides
                .selected_value
                .unwrap_or_else(|| self.selected_value.clone()),
            values: overrides.values.unwrap_or_else(|| self.values.clone()),
            wrapper_class_name: overrides
                .wrapper_class_name
                .unwrap_or_else(|| self.wrapper_class_name.clone()),
        }
    }
}

impl Radio {
    /// Returns a new record selecting `value`, or clearing the selection
    /// when `value` is already the selected one.
    pub fn selected(&self, value: &str) -> Radio {
        let next = if self.selected_value.as_deref() == Some(value) {
            None
        } else {
            Some(value.to_string())
        };

        self.merged(RadioOverrides {
            selected_value: Some(next),
            ..Default::default()
        })
    }
}

/// Merges a partial override into the documented radio defaults.
pub fn configure_radio(overrides: RadioOverrides) -> Radio {
    Radio::default().merged(overrides)
}
