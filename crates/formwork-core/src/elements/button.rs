//! Button records: pure action descriptors with no validation state.

use crate::handler::UpdateHandler;
use crate::patch::Patch;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Button {
    pub class_name: String,
    pub disabled: bool,
    pub name: String,
    pub on_click: UpdateHandler<Button>,
    pub text: String,
}

#[derive(Default)]
pub struct ButtonOverrides {
    pub class_name: Option<String>,
    pub disabled: Option<bool>,
    pub name: Option<String>,
    pub on_click: Option<UpdateHandler<Button>>,
    pub text: Option<String>,
}

impl Patch for Button {
    type Overrides = ButtonOverrides;

    fn merged(&self, overrides: ButtonOverrides) -> Self {
        Self {
            class_name: overrides.class_name.unwrap_or_else(|| self.class_name.clone()),
            disabled: overrides.disabled.unwrap_or(self.disabled),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            on_click: overrides.on_click.unwrap_or_else(|| self.on_click.clone()),
            text: overrides.text.unwrap_or_else(|| self.text.clone()),
        }
    }
}

/// Merges a partial override into the documented button defaults.
pub fn configure_button(overrides: ButtonOverrides) -> Button {
    Button::default().merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_without_overrides_yields_the_defaults() {
        let button = configure_button(ButtonOverrides::default());
        assert_eq!(button, Button::default());
        assert!(button.on_click.is_inert());
    }

    #[test]
    fn configure_replaces_only_the_overridden_fields() {
        let button = configure_button(ButtonOverrides {
            name: Some("submit".into()),
            text: Some("Sign in".into()),
            ..Default::default()
        });

        assert_eq!(button.name, "submit");
        assert_eq!(button.text, "Sign in");
        assert_eq!(button.class_name, "");
        assert!(!button.disabled);
    }
}
