use std::io;

use clap::Args;
use jiff::{
    Zoned,
    civil::{Date, Time},
};
use pesqueiro::{
    catalog::Catalog,
    rentals::{RentalItemId, RentalRequest, confirm_rental_on},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct RentArgs {
    /// Rental item id; lists the rental items when omitted
    #[arg(long)]
    item: Option<RentalItemId>,

    /// Rental day (YYYY-MM-DD)
    #[arg(long)]
    date: Option<Date>,

    /// Start time (HH:MM), between 06:00 and 20:00
    #[arg(long, default_value = "09:00", value_parser = parse_start)]
    start: Time,

    /// Duration in hours, clamped to 1-24
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    hours: i64,

    /// Date to treat as today; defaults to the system date
    #[arg(long)]
    today: Option<Date>,
}

pub(crate) fn run(
    args: &RentArgs,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let Some(id) = args.item else {
        return write_catalog(catalog, out).map_err(|error| write_failed(&error));
    };

    let item = catalog
        .rental_item(id)
        .ok_or_else(|| format!("no rental item with id {id}"))?;

    let mut request = RentalRequest::new(id)
        .starting_at(args.start)
        .for_hours(args.hours);

    if let Some(date) = args.date {
        request = request.on(date);
    }

    let today = args.today.unwrap_or_else(|| Zoned::now().date());

    let booking = confirm_rental_on(item, &request, today).map_err(|error| error.to_string())?;

    let plural = if booking.hours > 1 { "s" } else { "" };

    writeln!(
        out,
        "Rental confirmed! {} reserved for {} hour{plural} on {} at {}. Total: {}",
        item.name,
        booking.hours,
        booking.date,
        booking.start.strftime("%H:%M"),
        booking.total,
    )
    .map_err(|error| write_failed(&error))
}

fn write_catalog(catalog: &Catalog, out: &mut impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Description", "Per Hour", "Available", "Unavailable On"]);

    for item in catalog.rental_items() {
        let blackout = item
            .unavailable_dates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            item.description.clone(),
            item.hourly_price.to_string(),
            item.available.to_string(),
            blackout,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")
}

fn parse_start(s: &str) -> Result<Time, String> {
    let invalid = || format!("expected HH:MM, got {s}");

    let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour = hour.parse::<i8>().map_err(|_err| invalid())?;
    let minute = minute.parse::<i8>().map_err(|_err| invalid())?;

    Time::new(hour, minute, 0, 0).map_err(|error| format!("invalid time {s}: {error}"))
}
