use std::io;

use clap::Args;
use pesqueiro::{
    catalog::Catalog,
    events::EventId,
    registration::RegistrationForm,
};

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Event id
    #[arg(long)]
    event: Option<EventId>,

    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Age in years
    #[arg(long, default_value = "")]
    age: String,
}

pub(crate) fn run(
    args: RegisterArgs,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let form = RegistrationForm {
        event: args.event,
        full_name: args.name,
        phone_number: args.phone,
        age: args.age,
    };

    let registration = form.validate(catalog).map_err(|error| {
        error
            .fields()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    let event = catalog
        .event(registration.event)
        .ok_or_else(|| format!("no event with id {}", registration.event))?;

    writeln!(out, "Registration successful! {}", registration.confirmation(event))
        .map_err(|error| write_failed(&error))
}
