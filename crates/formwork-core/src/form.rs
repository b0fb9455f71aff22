//! The Form aggregate.
//!
//! A [`Form`] owns its element collections outright; elements are value
//! objects with no back-reference, and updates travel upward only through
//! the handlers their owner wired in at configure time. Every mutating
//! entry point re-validates the inputs, recomputes aggregate validity, and
//! hands the new snapshot to the publish handler. Failed name lookups are
//! ordinary "not found" outcomes; the only fatal path is a broken rule
//! spec surfacing from the evaluator.

use indexmap::IndexMap;
use regex::Regex;

use formwork_validation::{passes_context_validation, passes_validation, RuleError};

use crate::elements::{
    configure_button, configure_checkbox, configure_input, configure_radio, configure_select,
    configure_toggle, Button, ButtonOverrides, Checkbox, CheckboxOverrides, Input, InputOverrides,
    Radio, RadioOverrides, Select, SelectOverrides, SelectValue, Toggle, ToggleOverrides,
    ToggleValue,
};
use crate::handler::UpdateHandler;
use crate::patch::Patch;

/// Discriminates the Form's element collections for name lookups.
///
/// `Unknown` is the explicit "no collection" arm; buttons are looked up by
/// name but are not an indexed, updatable collection, so both resolve to
/// not-found without scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Unknown,
    Button,
    Checkbox,
    Input,
    Radio,
    Select,
    Toggle,
}

/// A full replacement record for one element, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum FormElement {
    Checkbox(Checkbox),
    Input(Input),
    Radio(Radio),
    Select(Select),
    Toggle(Toggle),
}

impl FormElement {
    pub fn name(&self) -> &str {
        match self {
            FormElement::Checkbox(checkbox) => &checkbox.name,
            FormElement::Input(input) => &input.name,
            FormElement::Radio(radio) => &radio.name,
            FormElement::Select(select) => &select.name,
            FormElement::Toggle(toggle) => &toggle.name,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            FormElement::Checkbox(_) => ElementKind::Checkbox,
            FormElement::Input(_) => ElementKind::Input,
            FormElement::Radio(_) => ElementKind::Radio,
            FormElement::Select(_) => ElementKind::Select,
            FormElement::Toggle(_) => ElementKind::Toggle,
        }
    }
}

impl From<Checkbox> for FormElement {
    fn from(checkbox: Checkbox) -> Self {
        FormElement::Checkbox(checkbox)
    }
}

impl From<Input> for FormElement {
    fn from(input: Input) -> Self {
        FormElement::Input(input)
    }
}

impl From<Radio> for FormElement {
    fn from(radio: Radio) -> Self {
        FormElement::Radio(radio)
    }
}

impl From<Select> for FormElement {
    fn from(select: Select) -> Self {
        FormElement::Select(select)
    }
}

impl From<Toggle> for FormElement {
    fn from(toggle: Toggle) -> Self {
        FormElement::Toggle(toggle)
    }
}

/// A value-only update for one element kind, used for bulk propagation.
///
/// The checkbox and radio variants carry the selection state, not the
/// option list: updating a value by name means updating what the user
/// picked.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementValue {
    /// An input's text value.
    Text(String),
    /// A select's value.
    Select(SelectValue),
    /// A toggle's position.
    Toggle(ToggleValue),
    /// A checkbox group's checked values.
    Checked(Vec<String>),
    /// A radio group's selection.
    Selection(Option<String>),
}

impl ElementValue {
    fn kind(&self) -> ElementKind {
        match self {
            ElementValue::Text(_) => ElementKind::Input,
            ElementValue::Select(_) => ElementKind::Select,
            ElementValue::Toggle(_) => ElementKind::Toggle,
            ElementValue::Checked(_) => ElementKind::Checkbox,
            ElementValue::Selection(_) => ElementKind::Radio,
        }
    }
}

/// The form aggregate: ordered element collections, aggregate validity,
/// and the publish handler wired in at construction.
#[derive(Clone, Debug)]
pub struct Form {
    pub buttons: Vec<Button>,
    pub checkboxes: Vec<Checkbox>,
    pub inputs: Vec<Input>,
    pub radios: Vec<Radio>,
    pub selects: Vec<Select>,
    pub toggles: Vec<Toggle>,
    /// True iff no input is individually invalid. Selects, checkboxes,
    /// radios, and toggles do not feed this flag; see DESIGN.md.
    pub is_valid: bool,
    publish: UpdateHandler<Form>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(UpdateHandler::inert())
    }
}

impl Form {
    /// An empty, valid form publishing snapshots through `publish`.
    pub fn new(publish: UpdateHandler<Form>) -> Self {
        Self {
            buttons: Vec::new(),
            checkboxes: Vec::new(),
            inputs: Vec::new(),
            radios: Vec::new(),
            selects: Vec::new(),
            toggles: Vec::new(),
            is_valid: true,
            publish,
        }
    }

    /// Runs both evaluation paths against an input's current value and
    /// returns the re-validated record. The argument is untouched.
    ///
    /// `touched` latches: `touch = true` forces it on, `touch = false`
    /// keeps whatever the record already had.
    pub fn validate_input(input: &Input, touch: bool) -> Result<Input, RuleError> {
        let result = passes_validation(&input.value, &input.rules)?;
        let context_result = passes_context_validation(&input.value, &input.context_rules);

        Ok(input.merged(InputOverrides {
            errors: Some(result.errors),
            context_errors: Some(context_result.errors),
            is_valid: Some(result.is_valid && context_result.is_valid),
            touched: Some(touch || input.touched),
            ..Default::default()
        }))
    }

    /// Publishes the current snapshot to the observer.
    pub fn update_state(&mut self) -> &mut Self {
        let publish = self.publish.clone();
        publish.emit(self);
        self
    }

    /// Index of the first element named `name` in the collection selected
    /// by `kind`. `Unknown` and `Button` resolve to `None` without a scan.
    pub fn index_by_name(&self, name: &str, kind: ElementKind) -> Option<usize> {
        match kind {
            ElementKind::Checkbox => self.checkboxes.iter().position(|c| c.name == name),
            ElementKind::Input => self.inputs.iter().position(|i| i.name == name),
            ElementKind::Radio => self.radios.iter().position(|r| r.name == name),
            ElementKind::Select => self.selects.iter().position(|s| s.name == name),
            ElementKind::Toggle => self.toggles.iter().position(|t| t.name == name),
            ElementKind::Button | ElementKind::Unknown => None,
        }
    }

    /// Replaces the element matching `element`'s name with the given
    /// record, then re-validates, recomputes aggregate validity, and
    /// publishes. When no element matches, the collections stay untouched
    /// but validation and publish still run once each.
    pub fn update_element(
        &mut self,
        element: impl Into<FormElement>,
    ) -> Result<&mut Self, RuleError> {
        let element = element.into();

        match self.index_by_name(element.name(), element.kind()) {
            Some(index) => match element {
                FormElement::Checkbox(checkbox) => self.checkboxes[index] = checkbox,
                FormElement::Input(input) => self.inputs[index] = input,
                FormElement::Radio(radio) => self.radios[index] = radio,
                FormElement::Select(select) => self.selects[index] = select,
                FormElement::Toggle(toggle) => self.toggles[index] = toggle,
            },
            None => {
                log::debug!(
                    "update_element: no {:?} named `{}`",
                    element.kind(),
                    element.name()
                );
            }
        }

        self.validate_inputs(false)?.validate_form().update_state();
        Ok(self)
    }

    /// Replaces only the value-bearing field of the named element. Does not
    /// re-validate and does not publish; used for bulk value propagation.
    pub fn update_value_in(&mut self, name: &str, value: ElementValue) -> &mut Self {
        let Some(index) = self.index_by_name(name, value.kind()) else {
            return self;
        };

        match value {
            ElementValue::Text(value) => {
                let next = self.inputs[index].merged(InputOverrides {
                    value: Some(value),
                    ..Default::default()
                });
                self.inputs[index] = next;
            }
            ElementValue::Select(value) => {
                let next = self.selects[index].merged(SelectOverrides {
                    value: Some(value),
                    ..Default::default()
                });
                self.selects[index] = next;
            }
            ElementValue::Toggle(value) => {
                let next = self.toggles[index].merged(ToggleOverrides {
                    value: Some(value),
                    ..Default::default()
                });
                self.toggles[index] = next;
            }
            ElementValue::Checked(selected) => {
                let next = self.checkboxes[index].merged(CheckboxOverrides {
                    selected_values: Some(selected),
                    ..Default::default()
                });
                self.checkboxes[index] = next;
            }
            ElementValue::Selection(selected) => {
                let next = self.radios[index].merged(RadioOverrides {
                    selected_value: Some(selected),
                    ..Default::default()
                });
                self.radios[index] = next;
            }
        }

        self
    }

    /// Copies each element's current value from a previous snapshot into
    /// this form's matching elements, by name. Used when an element list is
    /// rebuilt so user-entered state survives reconstruction. A no-op when
    /// no snapshot is given.
    pub fn populate_from_previous(&mut self, previous: Option<&Form>) -> &mut Self {
        let Some(previous) = previous else {
            return self;
        };

        for checkbox in &previous.checkboxes {
            self.update_value_in(
                &checkbox.name,
                ElementValue::Checked(checkbox.selected_values.clone()),
            );
        }
        for input in &previous.inputs {
            self.update_value_in(&input.name, ElementValue::Text(input.value.clone()));
        }
        for radio in &previous.radios {
            self.update_value_in(
                &radio.name,
                ElementValue::Selection(radio.selected_value.clone()),
            );
        }
        for select in &previous.selects {
            self.update_value_in(&select.name, ElementValue::Select(select.value.clone()));
        }
        for toggle in &previous.toggles {
            self.update_value_in(&toggle.name, ElementValue::Toggle(toggle.value));
        }

        self
    }

    /// Recomputes aggregate validity: true iff no input is invalid.
    pub fn validate_form(&mut self) -> &mut Self {
        self.is_valid = self.inputs.iter().all(|input| input.is_valid);
        self
    }

    /// Re-validates every input, replacing the collection element-wise.
    pub fn validate_inputs(&mut self, touch: bool) -> Result<&mut Self, RuleError> {
        let mut validated = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            validated.push(Form::validate_input(input, touch)?);
        }
        self.inputs = validated;
        Ok(self)
    }

    /// Force-validates every input as touched and recomputes validity.
    ///
    /// A valid form runs `on_valid` and does not publish: the caller takes
    /// over (typically to submit elsewhere) with no intermediate re-render.
    /// An invalid form publishes the snapshot so error state can surface,
    /// and never runs the callback.
    pub fn submit<F: FnOnce()>(&mut self, on_valid: F) -> Result<(), RuleError> {
        self.validate_inputs(true)?.validate_form();

        if self.is_valid {
            on_valid();
        } else {
            log::debug!("submit rejected: {} invalid input(s)", self.invalid_input_count());
            self.update_state();
        }

        Ok(())
    }

    fn invalid_input_count(&self) -> usize {
        self.inputs.iter().filter(|input| !input.is_valid).count()
    }

    /// Flattens input names to current values. Later duplicate names
    /// overwrite earlier values.
    pub fn serialize_inputs(&self) -> IndexMap<String, String> {
        self.inputs
            .iter()
            .map(|input| (input.name.clone(), input.value.clone()))
            .collect()
    }

    /// Flattens select names to current values. Later duplicate names
    /// overwrite earlier values.
    pub fn serialize_selects(&self) -> IndexMap<String, SelectValue> {
        self.selects
            .iter()
            .map(|select| (select.name.clone(), select.value.clone()))
            .collect()
    }

    /// First button with the given name, or a configured default stamped
    /// with it. The fallback is not stored in the form.
    pub fn button_by_name(&self, name: &str) -> Button {
        self.buttons
            .iter()
            .find(|button| button.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_button(ButtonOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    pub fn checkbox_by_name(&self, name: &str) -> Checkbox {
        self.checkboxes
            .iter()
            .find(|checkbox| checkbox.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_checkbox(CheckboxOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    pub fn input_by_name(&self, name: &str) -> Input {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_input(InputOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    pub fn radio_by_name(&self, name: &str) -> Radio {
        self.radios
            .iter()
            .find(|radio| radio.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_radio(RadioOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    pub fn select_by_name(&self, name: &str) -> Select {
        self.selects
            .iter()
            .find(|select| select.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_select(SelectOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    pub fn toggle_by_name(&self, name: &str) -> Toggle {
        self.toggles
            .iter()
            .find(|toggle| toggle.name == name)
            .cloned()
            .unwrap_or_else(|| {
                configure_toggle(ToggleOverrides {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
            })
    }

    /// All inputs whose name matches the pattern; empty when none do.
    pub fn inputs_by_name_match(&self, pattern: &Regex) -> Vec<&Input> {
        self.inputs
            .iter()
            .filter(|input| pattern.is_match(&input.name))
            .collect()
    }

    /// All selects whose name matches the pattern; empty when none do.
    pub fn selects_by_name_match(&self, pattern: &Regex) -> Vec<&Select> {
        self.selects
            .iter()
            .filter(|select| pattern.is_match(&select.name))
            .collect()
    }
}
