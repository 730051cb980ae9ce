use std::io;

use clap::{Parser, Subcommand};
use pesqueiro::{
    config::{CatalogConfig, LoggingConfig},
    logging::init_subscriber,
};

mod events;
mod register;
mod rent;
mod shop;

#[derive(Debug, Parser)]
#[command(
    name = "pesqueiro",
    about = "Duzepesqueiro events, gear shop and rentals",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(flatten)]
    catalog: CatalogConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List events, optionally filtered
    Events(events::EventsArgs),

    /// Browse the gear shop and build an order
    Shop(shop::ShopArgs),

    /// Rent a piece of gear by the hour
    Rent(rent::RentArgs),

    /// Register for an event
    Register(register::RegisterArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        init_subscriber(&self.logging).map_err(|error| error.to_string())?;

        let catalog = self
            .catalog
            .load()
            .map_err(|error| format!("failed to load catalog: {error}"))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Events(args) => events::run(&args, &catalog, &mut out),
            Commands::Shop(args) => shop::run(&args, &catalog, &mut out),
            Commands::Rent(args) => rent::run(&args, &catalog, &mut out),
            Commands::Register(args) => register::run(args, &catalog, &mut out),
        }
    }
}

fn write_failed(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}
