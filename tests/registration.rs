//! Registering for events in the bundled catalog.

use testresult::TestResult;

use pesqueiro::{
    catalog::Catalog,
    registration::{FieldError, RegistrationForm},
};

#[test]
fn registration_confirms_the_event() -> TestResult {
    let catalog = Catalog::builtin()?;
    let form = RegistrationForm {
        event: Some(4),
        full_name: "Ana Lima".to_string(),
        phone_number: "(11) 98765-4321".to_string(),
        age: "29".to_string(),
    };

    let registration = form.validate(&catalog)?;
    let event = catalog.event(registration.event).ok_or("missing event")?;

    assert_eq!(
        registration.confirmation(event),
        "Ana Lima, you've been registered for Business Networking Night on May 10, 2025."
    );

    Ok(())
}

#[test]
fn unknown_event_and_bad_age_are_both_reported() -> TestResult {
    let catalog = Catalog::builtin()?;
    let form = RegistrationForm {
        event: Some(99),
        full_name: "Ana Lima".to_string(),
        phone_number: "(11) 98765-4321".to_string(),
        age: "twenty".to_string(),
    };

    let err = form.validate(&catalog).err().ok_or("expected an error")?;

    assert_eq!(
        err.fields(),
        &[FieldError::EventNotFound(99), FieldError::InvalidAge]
    );

    Ok(())
}
