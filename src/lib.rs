//! Pesqueiro
//!
//! Booking and catalog core for the Duzepesqueiro fishing park: event filtering, the gear
//! shop cart, rental pricing and event registration. Catalog data is loaded once from
//! fixtures and passed into each operation.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod events;
pub mod fixtures;
pub mod logging;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod registration;
pub mod rentals;
pub mod shop;
