//! Scripted stand-in for the rendering layer.
//!
//! Builds the two classic example forms (sign-in and create-password),
//! feeds "user" interactions through the core's update entry points, and
//! logs each published snapshot where a real UI would re-render.

use std::cell::RefCell;
use std::rc::Rc;

use formwork_core::prelude::*;

fn sign_in_form(publish: UpdateHandler<Form>) -> Form {
    let mut form = Form::new(publish);

    form.inputs.push(configure_input(InputOverrides {
        name: Some("email".into()),
        input_type: Some(InputType::Email),
        placeholder: Some("Email".into()),
        rules: Some(vec!["required".into(), "isEmail".into()]),
        error_message: Some("Please enter a valid email address".into()),
        ..Default::default()
    }));

    form.inputs.push(configure_input(InputOverrides {
        name: Some("password".into()),
        input_type: Some(InputType::Password),
        placeholder: Some("Password".into()),
        rules: Some(vec!["required".into(), "isLength:6".into()]),
        error_message: Some("Password has to be at least 6 characters long".into()),
        ..Default::default()
    }));

    form.buttons.push(configure_button(ButtonOverrides {
        name: Some("submit".into()),
        class_name: Some("button".into()),
        text: Some("Sign in".into()),
        ..Default::default()
    }));

    form
}

/// The confirm field's cross-field rule reads the password through a shared
/// mirror the driver keeps in sync, so the rule never has to reach back
/// into the form that owns it.
fn create_password_form(
    publish: UpdateHandler<Form>,
    password_mirror: &Rc<RefCell<String>>,
) -> Form {
    let mut form = Form::new(publish);

    form.inputs.push(configure_input(InputOverrides {
        name: Some("password".into()),
        input_type: Some(InputType::Password),
        placeholder: Some("Password".into()),
        rules: Some(vec!["required".into(), "isLength:6".into()]),
        error_message: Some("Password has to be at least 6 characters long".into()),
        ..Default::default()
    }));

    let mirror = Rc::clone(password_mirror);
    form.inputs.push(configure_input(InputOverrides {
        name: Some("confirmPassword".into()),
        input_type: Some(InputType::Password),
        placeholder: Some("Confirm password".into()),
        context_rules: Some(vec![ContextRule::new(move |value| {
            value == mirror.borrow().as_str()
        })]),
        context_error_message: Some("Passwords don't match".into()),
        ..Default::default()
    }));

    form.buttons.push(configure_button(ButtonOverrides {
        name: Some("submit".into()),
        class_name: Some("button".into()),
        text: Some("Confirm".into()),
        ..Default::default()
    }));

    form
}

/// One keystroke burst: a new input record with the typed value, handed to
/// the form exactly the way a bound `on_update` handler would.
fn type_into(form: &mut Form, name: &str, value: &str) -> Result<(), RuleError> {
    let next = form.input_by_name(name).merged(InputOverrides {
        value: Some(value.to_string()),
        ..Default::default()
    });
    form.update_element(next)?;
    Ok(())
}

fn main() -> Result<(), RuleError> {
    env_logger::init();

    println!("=== Formwork login demo ===");
    println!();

    // Sign-in: a rejected attempt, then a corrected one.
    let mut form = sign_in_form(UpdateHandler::new(|form: &Form| {
        log::info!("sign-in snapshot published (valid: {})", form.is_valid);
    }));

    type_into(&mut form, "email", "not-an-email")?;
    type_into(&mut form, "password", "hunter22")?;
    form.submit(|| println!("sign-in accepted (unexpected)"))?;
    println!(
        "first attempt rejected; email errors: {:?}",
        form.input_by_name("email").errors
    );

    type_into(&mut form, "email", "test@website.com")?;
    form.submit(|| println!("sign-in accepted"))?;
    println!("payload: {:?}", form.serialize_inputs());
    println!();

    // Create-password: the confirm field mirrors the password field.
    let password_mirror = Rc::new(RefCell::new(String::new()));
    let mut form = create_password_form(
        UpdateHandler::new(|form: &Form| {
            log::info!("create-password snapshot published (valid: {})", form.is_valid);
        }),
        &password_mirror,
    );

    type_into(&mut form, "password", "tEst_password1")?;
    *password_mirror.borrow_mut() = form.input_by_name("password").value;

    type_into(&mut form, "confirmPassword", "different")?;
    form.submit(|| println!("create-password accepted (unexpected)"))?;
    let confirm = form.input_by_name("confirmPassword");
    println!(
        "mismatch rejected; context errors {:?} ({})",
        confirm.context_errors, confirm.context_error_message
    );

    type_into(&mut form, "confirmPassword", "tEst_password1")?;
    form.submit(|| println!("create-password accepted"))?;

    Ok(())
}
