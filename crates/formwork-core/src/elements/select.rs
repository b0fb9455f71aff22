//! Select records.

use super::Choice;
use crate::handler::{ElementData, UpdateHandler};
use crate::patch::Patch;

/// A select's current value: one string, or several when the select is
/// configured as `multiple`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectValue {
    Single(String),
    Multiple(Vec<String>),
}

impl SelectValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            SelectValue::Single(value) => Some(value),
            SelectValue::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            SelectValue::Single(_) => None,
            SelectValue::Multiple(values) => Some(values),
        }
    }
}

impl Default for SelectValue {
    fn default() -> Self {
        SelectValue::Single(String::new())
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        SelectValue::Single(value.to_string())
    }
}

impl From<String> for SelectValue {
    fn from(value: String) -> Self {
        SelectValue::Single(value)
    }
}

impl From<Vec<String>> for SelectValue {
    fn from(values: Vec<String>) -> Self {
        SelectValue::Multiple(values)
    }
}

/// A dropdown select.
///
/// Selects carry a single `is_valid` flag but do not currently feed the
/// form-level aggregate validity, which only considers inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    pub data: ElementData,
    pub default_options: Vec<Choice>,
    pub disabled: bool,
    pub is_valid: bool,
    pub label: String,
    pub multiple: bool,
    pub name: String,
    pub on_update: UpdateHandler<Select>,
    pub options: Vec<Choice>,
    pub required: bool,
    pub touched: bool,
    pub value: SelectValue,
    pub wrapper_class_name: String,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            data: ElementData::none(),
            default_options: Vec::new(),
            disabled: false,
            is_valid: true,
            label: String::new(),
            multiple: false,
            name: String::new(),
            on_update: UpdateHandler::inert(),
            options: Vec::new(),
            required: false,
            touched: false,
            value: SelectValue::default(),
            wrapper_class_name: String::new(),
        }
    }
}

#[derive(Default)]
pub struct SelectOverrides {
    pub data: Option<ElementData>,
    pub default_options: Option<Vec<Choice>>,
    pub disabled: Option<bool>,
    pub is_valid: Option<bool>,
    pub label: Option<String>,
    pub multiple: Option<bool>,
    pub name: Option<String>,
    pub on_update: Option<UpdateHandler<Select>>,
    pub options: Option<Vec<Choice>>,
    pub required: Option<bool>,
    pub touched: Option<bool>,
    pub value: Option<SelectValue>,
    pub wrapper_class_name: Option<String>,
}

impl Patch for Select {
    type Overrides = SelectOverrides;

    fn merged(&self, overrides: SelectOverrides) -> Self {
        Self {
            data: overrides.data.unwrap_or_else(|| self.data.clone()),
            default_options: overrides
                .default_options
                .unwrap_or_else(|| self.default_options.clone()),
            disabled: overrides.disabled.unwrap_or(self.disabled),
            is_valid: overrides.is_valid.unwrap_or(self.is_valid),
            label: overrides.label.unwrap_or_else(|| self.label.clone()),
            multiple: overrides.multiple.unwrap_or(self.multiple),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_update: overrides.on_update.unwrap_or_else(|| self.on_update.clone()),
            options: overrides.options.unwrap_or_else(|| self.options.clone()),
            required: overrides.required.unwrap_or(self.required),
            touched: overrides.touched.unwrap_or(self.touched),
            value: overrides.value.unwrap_or_else(|| self.value.clone()),
            wrapper_class_name: overrides
                .wrapper_class_name
                .unwrap_or_else(|| self.wrapper_class_name.clone()),
        }
    }
}

/// Merges a partial override into the documented select defaults.
pub fn configure_select(overrides: SelectOverrides) -> Select {
    Select::default().merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_without_overrides_yields_the_defaults() {
        let select = configure_select(SelectOverrides::default());
        assert_eq!(select, Select::default());
        assert_eq!(select.value, SelectValue::Single(String::new()));
        assert!(select.is_valid);
        assert!(!select.multiple);
        assert!(select.options.is_empty());
        assert!(select.default_options.is_empty());
        assert!(select.data.is_none());
    }

    #[test]
    fn configure_replaces_only_the_overridden_fields() {
        let select = configure_select(SelectOverrides {
            name: Some("country".into()),
            options: Some(vec![Choice::new("se", "Sweden"), Choice::new("no", "Norway")]),
            value: Some("se".into()),
            ..Default::default()
        });

        assert_eq!(select.name, "country");
        assert_eq!(select.options.len(), 2);
        assert_eq!(select.value.as_single(), Some("se"));
        assert_eq!(select.label, "");
    }

    #[test]
    fn multiple_selects_hold_a_value_list() {
        let select = configure_select(SelectOverrides {
            multiple: Some(true),
            value: Some(vec!["a".to_string(), "b".to_string()].into()),
            ..Default::default()
        });

        assert_eq!(
            select.value.as_multiple(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }
}
