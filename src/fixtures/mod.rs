//! Fixtures
//!
//! Loads catalog data from YAML files laid out as `<base>/{events,shop,rentals}/<set>.yml`.

use std::{fs, path::PathBuf};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    events::Event,
    rentals::RentalItem,
    shop::ShopItem,
};

pub mod events;
pub mod rentals;
pub mod shop;

/// Name of the fixture set bundled with the crate.
pub const BUILTIN_SET: &str = "duzepesqueiro";

const BUILTIN_EVENTS: &str = include_str!("../../fixtures/events/duzepesqueiro.yml");
const BUILTIN_SHOP: &str = include_str!("../../fixtures/shop/duzepesqueiro.yml");
const BUILTIN_RENTALS: &str = include_str!("../../fixtures/rentals/duzepesqueiro.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No shop or rental items loaded yet; currency unknown")]
    NoCurrency,

    /// The loaded data doesn't form a valid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    events: Vec<Event>,
    shop_items: Vec<ShopItem>,
    rental_items: Vec<RentalItem>,

    /// Currency shared by every loaded price
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            events: Vec::new(),
            shop_items: Vec::new(),
            rental_items: Vec::new(),
            currency: None,
        }
    }

    /// Load events from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_events(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("events", name)?;

        self.add_events(&contents)
    }

    /// Load shop items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price is invalid.
    pub fn load_shop(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("shop", name)?;

        self.add_shop_items(&contents)
    }

    /// Load rental items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price is invalid.
    pub fn load_rentals(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("rentals", name)?;

        self.add_rental_items(&contents)
    }

    /// Load a complete fixture set (events, shop and rentals with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_dir(Self::new().base_path, name)
    }

    /// Load a complete fixture set from a given base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_dir(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture
            .load_events(name)?
            .load_shop(name)?
            .load_rentals(name)?;

        Ok(fixture)
    }

    /// The fixture set compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML is invalid.
    pub fn builtin() -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .add_events(BUILTIN_EVENTS)?
            .add_shop_items(BUILTIN_SHOP)?
            .add_rental_items(BUILTIN_RENTALS)?;

        Ok(fixture)
    }

    /// Parse events from YAML and append them.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn add_events(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: events::EventsFixture = serde_norway::from_str(yaml)?;

        self.events
            .extend(fixture.events.into_iter().map(Event::from));

        Ok(self)
    }

    /// Parse shop items from YAML and append them.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML or a price is invalid.
    pub fn add_shop_items(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: shop::ShopFixture = serde_norway::from_str(yaml)?;

        for item_fixture in fixture.items {
            let item = ShopItem::try_from(item_fixture)?;

            self.track_currency(item.price.currency())?;
            self.shop_items.push(item);
        }

        Ok(self)
    }

    /// Parse rental items from YAML and append them.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML or a price is invalid.
    pub fn add_rental_items(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: rentals::RentalsFixture = serde_norway::from_str(yaml)?;

        for item_fixture in fixture.items {
            let item = RentalItem::try_from(item_fixture)?;

            self.track_currency(item.hourly_price.currency())?;
            self.rental_items.push(item);
        }

        Ok(self)
    }

    /// Loaded events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Loaded shop items
    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    /// Loaded rental items
    pub fn rental_items(&self) -> &[RentalItem] {
        &self.rental_items
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no priced items have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Build a catalog from everything loaded so far.
    ///
    /// # Errors
    ///
    /// Returns an error if no priced items were loaded, or if the data fails catalog checks.
    pub fn catalog(&self) -> Result<Catalog, FixtureError> {
        let catalog = Catalog::new(
            self.events.clone(),
            self.shop_items.clone(),
            self.rental_items.clone(),
            self.currency()?,
        )?;

        debug!(
            events = catalog.events().len(),
            shop_items = catalog.shop_items().len(),
            rental_items = catalog.rental_items().len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "reading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }

    fn track_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// The Duzepesqueiro catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixtures are invalid.
    pub fn builtin() -> Result<Self, FixtureError> {
        Fixture::builtin()?.catalog()
    }
}

/// Parse price string (e.g., "24.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
