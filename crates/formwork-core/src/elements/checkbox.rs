//! Checkbox group records.

use super::Choice;
use crate::handler::UpdateHandler;
use crate::patch::Patch;

/// A group of checkboxes sharing one name.
///
/// `selected_values` holds each checked value at most once; toggling goes
/// through [`Checkbox::toggled`] which adds an absent value and removes a
/// present one.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Checkbox {
    pub disabled: bool,
    pub label: String,
    pub name: String,
    pub on_click: UpdateHandler<Checkbox>,
    pub selected_values: Vec<String>,
    pub values: Vec<Choice>,
    pub wrapper_class_name: String,
}

#[derive(Default)]
pub struct CheckboxOverrides {
    pub disabled: Option<bool>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub on_click: Option<UpdateHandler<Checkbox>>,
    pub selected_values: Option<Vec<String>>,
    pub values: Option<Vec<Choice>>,
    pub wrapper_class_name: Option<String>,
}

impl Patch for Checkbox {
    type Overrides = CheckboxOverrides;

    fn merged(&self, overrides: CheckboxOverrides) -> Self {
        Self {
            disabled: overrides.disabled.unwrap_or(self.disabled),
            label: overrides.label.unwrap_or_else(|| self.label.clone()),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_click: overrides.on_click.unwrap_or_else(|| self.on_click.clone()),
            selected_values: overrides
                .selected_values
                .unwrap_or_else(|| self.selected_values.clone()),
            values: overrides.values.unwrap_or_else(|| self.values.clone()),
            wrapper_class_name: overrides
                .wrapper_class_name
                .unwrap_or_else(|| self.wrapper_class_name.clone()),
        }
    }
}

impl Checkbox {
    /// Returns a new record with `value` checked if it was unchecked and
    /// unchecked if it was checked.
    pub fn toggled(&self, value: &str) -> Checkbox {
        let mut selected = self.selected_values.clone();

        match selected.iter().position(|existing| existing == value) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(value.to_string()),
        }

        self.merged(CheckboxOverrides {
            selected_values: Some(selected),
            ..Default::default()
        })
    }
}

/// Merges a partial override into the documented checkbox defaults.
pub fn configure_checkbox(overrides: CheckboxOverrides) -> Checkbox {
    Checkbox::default().merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_without_overrides_yields_the_defaults() {
        let checkbox = configure_checkbox(CheckboxOverrides::default());
        assert_eq!(checkbox, Checkbox::default());
        assert!(checkbox.selected_values.is_empty());
        assert!(checkbox.values.is_empty());
    }

    #[test]
    fn toggled_adds_an_absent_value() {
        let checkbox = configure_checkbox(CheckboxOverrides {
            selected_values: Some(vec!["a".into()]),
            ..Default::default()
        });

        let next = checkbox.toggled("b");
        assert_eq!(next.selected_values, vec!["a".to_string(), "b".to_string()]);
        // The original record is a separate snapshot.
        assert_eq!(checkbox.selected_values, vec!["a".to_string()]);
    }

    #[test]
    fn toggled_removes_a_present_value() {
        let checkbox = configure_checkbox(CheckboxOverrides {
            selected_values: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        });

        let next = checkbox.toggled("a");
        assert_eq!(next.selected_values, vec!["b".to_string()]);
    }
}
