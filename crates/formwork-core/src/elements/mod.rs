//! Element records and their configure factories.
//!
//! Each kind lives in its own module and follows the same shape: a fully
//! defaulted record struct, an all-optional `<Kind>Overrides` mirror, a
//! [`Patch`](crate::patch::Patch) impl that merges the two, and a free
//! `configure_<kind>` function that merges into the documented defaults.

mod button;
mod checkbox;
mod input;
mod radio;
mod select;
mod toggle;

pub use button::{configure_button, Button, ButtonOverrides};
pub use checkbox::{configure_checkbox, Checkbox, CheckboxOverrides};
pub use input::{configure_input, Input, InputOverrides, InputType};
pub use radio::{configure_radio, Radio, RadioOverrides};
pub use select::{configure_select, Select, SelectOverrides, SelectValue};
pub use toggle::{configure_toggle, Toggle, ToggleOverrides, ToggleValue};

/// One selectable value/label pair, shared by checkbox values, radio
/// values, and select options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Base CSS class stamped on every rendered element wrapper.
pub const DEFAULT_CLASS_NAME: &str = "form-element";

/// Builds the wrapper class string for an element kind, dropping empty
/// segments: `form-element form-element-<kind> <extra>`.
pub fn wrapper_class(extra: &str, element: &str) -> String {
    let kind_class = format!("{DEFAULT_CLASS_NAME}-{element}");

    [DEFAULT_CLASS_NAME, kind_class.as_str(), extra]
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
