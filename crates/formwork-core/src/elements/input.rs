//! Text-like input records: the only kind with validation state.

use formwork_validation::ContextRule;

use crate::handler::{ElementData, UpdateHandler};
use crate::patch::Patch;

/// What the rendering layer should draw this input as. Opaque to the core
/// beyond being part of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Date,
    Time,
    Textarea,
}

/// A validated text input.
///
/// `errors` holds the names of failed syntactic rules and `context_errors`
/// the positional indices of failed context rules; the two lists are never
/// merged. `is_valid` is the conjunction of both evaluation paths as of the
/// last validation. `touched` latches to `true` the first time the input is
/// validated with `touch = true` and never resets.
#[derive(Clone, Debug, PartialEq)]
pub struct Input {
    pub context_rules: Vec<ContextRule>,
    pub context_errors: Vec<String>,
    pub context_error_message: String,
    pub data: ElementData,
    pub disabled: bool,
    pub errors: Vec<String>,
    pub error_message: String,
    pub is_valid: bool,
    pub label: String,
    pub name: String,
    pub on_update: UpdateHandler<Input>,
    pub placeholder: String,
    pub rules: Vec<String>,
    pub touched: bool,
    pub input_type: InputType,
    pub value: String,
    pub wrapper_class_name: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            context_rules: Vec::new(),
            context_errors: Vec::new(),
            context_error_message: "There has been an error".to_string(),
            data: ElementData::none(),
            disabled: false,
            errors: Vec::new(),
            error_message: "There has been an error".to_string(),
            is_valid: true,
            label: String::new(),
            name: String::new(),
            on_update: UpdateHandler::inert(),
            placeholder: String::new(),
            rules: Vec::new(),
            touched: false,
            input_type: InputType::Text,
            value: String::new(),
            wrapper_class_name: String::new(),
        }
    }
}

#[derive(Default)]
pub struct InputOverrides {
    pub context_rules: Option<Vec<ContextRule>>,
    pub context_errors: Option<Vec<String>>,
    pub context_error_message: Option<String>,
    pub data: Option<ElementData>,
    pub disabled: Option<bool>,
    pub errors: Option<Vec<String>>,
    pub error_message: Option<String>,
    pub is_valid: Option<bool>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub on_update: Option<UpdateHandler<Input>>,
    pub placeholder: Option<String>,
    pub rules: Option<Vec<String>>,
    pub touched: Option<bool>,
    pub input_type: Option<InputType>,
    pub value: Option<String>,
    pub wrapper_class_name: Option<String>,
}

impl Patch for Input {
    type Overrides = InputOverrides;

    fn merged(&self, overrides: InputOverrides) -> Self {
        Self {
            context_rules: overrides
                .context_rules
                .unwrap_or_else(|| self.context_rules.clone()),
            context_errors: overrides
                .context_errors
                .unwrap_or_else(|| self.context_errors.clone()),
            context_error_message: overrides
                .context_error_message
                .unwrap_or_else(|| self.context_error_message.clone()),
            data: overrides.data.unwrap_or_else(|| self.data.clone()),
            disabled: overrides.disabled.unwrap_or(self.disabled),
            errors: overrides.errors.unwrap_or_else(|| self.errors.clone()),
            error_message: overrides
                .error_message
                .unwrap_or_else(|| self.error_message.clone()),
            is_valid: overrides.is_valid.unwrap_or(self.is_valid),
            label: overrides.label.unwrap_or_else(|| self.label.clone()),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_update: overrides.on_update.unwrap_or_else(|| self.on_update.clone()),
            placeholder: overrides
                .placeholder
                .unwrap_or_else(|| self.placeholder.clone()),
            rules: overrides.rules.unwrap_or_else(|| self.rules.clone()),
            touched: overrides.touched.unwrap_or(self.touched),
            input_type: overrides.input_type.unwrap_or(self.input_type),
            value: overrides.value.unwrap_or_else(|| self.value.clone()),
            wrapper_class_name: overrides
                .wrapper_class_name
                .unwrap_or_else(|| self.wrapper_class_name.clone()),
        }
    }
}

/// Merges a partial override into the documented input defaults.
pub fn configure_input(overrides: InputOverrides) -> Input {
    Input::default().merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_without_overrides_yields_the_defaults() {
        let input = configure_input(InputOverrides::default());
        assert_eq!(input, Input::default());
        assert_eq!(input.input_type, InputType::Text);
        assert_eq!(input.error_message, "There has been an error");
        assert!(input.is_valid);
        assert!(!input.touched);
        assert!(input.data.is_none());
    }

    #[test]
    fn configure_replaces_only_the_overridden_fields() {
        let input = configure_input(InputOverrides {
            name: Some("email".into()),
            input_type: Some(InputType::Email),
            rules: Some(vec!["required".into(), "isEmail".into()]),
            placeholder: Some("Email".into()),
            ..Default::default()
        });

        assert_eq!(input.name, "email");
        assert_eq!(input.input_type, InputType::Email);
        assert_eq!(input.rules, vec!["required".to_string(), "isEmail".to_string()]);
        assert_eq!(input.placeholder, "Email");
        assert_eq!(input.value, "");
        assert!(input.context_rules.is_empty());
    }
}
