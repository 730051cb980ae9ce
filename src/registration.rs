//! Event Registration

use std::{fmt, ops::RangeInclusive};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::Catalog,
    events::{Event, EventId},
};

const FULL_NAME_CHARS: RangeInclusive<usize> = 2..=100;
const PHONE_NUMBER_CHARS: RangeInclusive<usize> = 10..=15;
const AGE_YEARS: RangeInclusive<u8> = 1..=120;

/// A field that failed validation, with the message to show next to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// No event was chosen.
    EventMissing,

    /// The chosen event isn't in the catalog.
    EventNotFound(EventId),

    /// Full name shorter than 2 characters.
    FullNameTooShort,

    /// Full name longer than 100 characters.
    FullNameTooLong,

    /// Phone number shorter than 10 characters.
    PhoneNumberTooShort,

    /// Phone number longer than 15 characters.
    PhoneNumberTooLong,

    /// Age isn't a whole number between 1 and 120.
    InvalidAge,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EventMissing => f.write_str("Please select an event."),
            FieldError::EventNotFound(id) => write!(f, "Event {id} does not exist."),
            FieldError::FullNameTooShort => {
                f.write_str("Full name must be at least 2 characters.")
            }
            FieldError::FullNameTooLong => {
                f.write_str("Full name must be at most 100 characters.")
            }
            FieldError::PhoneNumberTooShort => f.write_str("Please enter a valid phone number."),
            FieldError::PhoneNumberTooLong => {
                f.write_str("Phone number must be at most 15 characters.")
            }
            FieldError::InvalidAge => f.write_str("Please enter a valid age between 1 and 120."),
        }
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("registration is invalid: {}", join(.0))]
pub struct RegistrationError(pub SmallVec<[FieldError; 4]>);

impl RegistrationError {
    /// The failing fields.
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }
}

fn join(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw registration input, as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Chosen event
    pub event: Option<EventId>,

    /// Full name
    pub full_name: String,

    /// Phone number, free format
    pub phone_number: String,

    /// Age, as entered
    pub age: String,
}

/// A validated registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    /// Event registered for
    pub event: EventId,

    /// Full name, trimmed
    pub full_name: String,

    /// Phone number, trimmed
    pub phone_number: String,

    /// Age in years
    pub age: u8,
}

impl Registration {
    /// Confirmation message shown once the registration is accepted.
    pub fn confirmation(&self, event: &Event) -> String {
        format!(
            "{}, you've been registered for {} on {}.",
            self.full_name, event.title, event.date
        )
    }
}

impl RegistrationForm {
    /// Validate every field against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] listing every failing field.
    pub fn validate(&self, catalog: &Catalog) -> Result<Registration, RegistrationError> {
        let mut errors: SmallVec<[FieldError; 4]> = SmallVec::new();

        let event = match self.event {
            None => {
                errors.push(FieldError::EventMissing);
                None
            }
            Some(id) if catalog.event(id).is_none() => {
                errors.push(FieldError::EventNotFound(id));
                None
            }
            Some(id) => Some(id),
        };

        let full_name = self.full_name.trim();
        let name_len = full_name.chars().count();

        if name_len < *FULL_NAME_CHARS.start() {
            errors.push(FieldError::FullNameTooShort);
        } else if name_len > *FULL_NAME_CHARS.end() {
            errors.push(FieldError::FullNameTooLong);
        }

        let phone_number = self.phone_number.trim();
        let phone_len = phone_number.chars().count();

        if phone_len < *PHONE_NUMBER_CHARS.start() {
            errors.push(FieldError::PhoneNumberTooShort);
        } else if phone_len > *PHONE_NUMBER_CHARS.end() {
            errors.push(FieldError::PhoneNumberTooLong);
        }

        let age = self
            .age
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|age| AGE_YEARS.contains(age));

        if age.is_none() {
            errors.push(FieldError::InvalidAge);
        }

        match (event, age) {
            (Some(event), Some(age)) if errors.is_empty() => {
                info!(event, "registration accepted");

                Ok(Registration {
                    event,
                    full_name: full_name.to_string(),
                    phone_number: phone_number.to_string(),
                    age,
                })
            }
            _ => {
                warn!(fields = errors.len(), "registration rejected");
                Err(RegistrationError(errors))
            }
        }
    }
}
