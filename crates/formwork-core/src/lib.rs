//! Form-state management core for Formwork.
//!
//! A [`Form`] owns ordered collections of configured elements (buttons,
//! checkboxes, inputs, radios, selects, toggles), indexes them by name,
//! applies updates by producing new records, re-validates its inputs, and
//! publishes each new snapshot to an observer supplied at construction.
//! Rendering, event binding, and debounce timing live above this crate and
//! only talk to it through the configure functions, the update entry
//! points, and the publish handler.

pub mod elements;
pub mod form;
pub mod handler;
pub mod patch;

pub use elements::{
    configure_button, configure_checkbox, configure_input, configure_radio, configure_select,
    configure_toggle, wrapper_class, Button, ButtonOverrides, Checkbox, CheckboxOverrides, Choice,
    Input, InputOverrides, InputType, Radio, RadioOverrides, Select, SelectOverrides, SelectValue,
    Toggle, ToggleOverrides, ToggleValue,
};
pub use form::{ElementKind, ElementValue, Form, FormElement};
pub use handler::{ElementData, UpdateHandler};
pub use patch::{update, Patch};

// The evaluator types travel with input records, so they are re-exported
// for callers that only depend on the core crate.
pub use formwork_validation::{ContextRule, RuleError, Validation};

pub mod prelude {
    pub use crate::elements::*;
    pub use crate::form::{ElementKind, ElementValue, Form, FormElement};
    pub use crate::handler::{ElementData, UpdateHandler};
    pub use crate::patch::{update, Patch};
    pub use formwork_validation::{ContextRule, RuleError, Validation};
}
