//! Rental Fixtures

use jiff::civil::Date;
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price},
    rentals::RentalItem,
};

/// Wrapper for rental items in YAML
#[derive(Debug, Deserialize)]
pub struct RentalsFixture {
    /// Items, in catalog order
    pub items: Vec<RentalItemFixture>,
}

/// Rental Item Fixture
#[derive(Debug, Deserialize)]
pub struct RentalItemFixture {
    /// Item id
    pub id: u32,

    /// Item name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Long description
    #[serde(default)]
    pub full_description: String,

    /// Price per hour (e.g., "15.00 USD")
    pub hourly_price: String,

    /// Units on hand
    #[serde(default)]
    pub available: u32,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Blackout dates (e.g., "2025-10-10")
    #[serde(default)]
    pub unavailable_dates: Vec<Date>,
}

impl TryFrom<RentalItemFixture> for RentalItem {
    type Error = FixtureError;

    fn try_from(fixture: RentalItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.hourly_price)?;

        Ok(RentalItem {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            full_description: fixture.full_description,
            hourly_price: Money::from_minor(minor_units, currency),
            available: fixture.available,
            image: fixture.image,
            unavailable_dates: fixture.unavailable_dates,
        })
    }
}
