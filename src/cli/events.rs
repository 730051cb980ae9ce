use std::io;

use clap::Args;
use jiff::civil::Date;
use pesqueiro::{
    catalog::Catalog,
    events::filter::{CapacityBand, EventFilter, filter_events},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct EventsArgs {
    /// Part of the event title
    #[arg(long, default_value = "")]
    name: String,

    /// Event day (YYYY-MM-DD); the year is ignored
    #[arg(long)]
    date: Option<Date>,

    /// Capacity band: all, small (< 150), medium (150-500) or large (> 500)
    #[arg(long, default_value = "all")]
    capacity: String,

    /// Part of the event time, e.g. "9:00 AM"
    #[arg(long, default_value = "")]
    time: String,
}

pub(crate) fn run(
    args: &EventsArgs,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let filter = EventFilter {
        name: args.name.clone(),
        date: args.date,
        capacity: CapacityBand::from_label(&args.capacity),
        time: args.time.clone(),
    };

    let events = filter_events(catalog.events(), &filter);

    if events.is_empty() {
        return writeln!(out, "no events match the filters").map_err(|error| write_failed(&error));
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Event", "Date", "Time", "Location", "Attendees", "Spaces"]);

    for event in events {
        builder.push_record([
            event.id.to_string(),
            event.title.clone(),
            event.date.clone(),
            event.time.clone(),
            event.location.clone(),
            format!("{} / {}", event.current_attendees, event.total_capacity),
            event.available_spaces().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(5..7), Alignment::right());

    writeln!(out, "{table}").map_err(|error| write_failed(&error))
}
