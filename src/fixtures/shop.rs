//! Shop Fixtures

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price},
    shop::ShopItem,
};

/// Wrapper for shop items in YAML
#[derive(Debug, Deserialize)]
pub struct ShopFixture {
    /// Items, in catalog order
    pub items: Vec<ShopItemFixture>,
}

/// Shop Item Fixture
#[derive(Debug, Deserialize)]
pub struct ShopItemFixture {
    /// Item id
    pub id: u32,

    /// Item name
    pub name: String,

    /// Item description
    #[serde(default)]
    pub description: String,

    /// Unit price (e.g., "24.99 USD")
    pub price: String,

    /// Units in stock
    pub stock: u32,

    /// Image reference
    #[serde(default)]
    pub image: String,
}

impl TryFrom<ShopItemFixture> for ShopItem {
    type Error = FixtureError;

    fn try_from(fixture: ShopItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(ShopItem {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            price: Money::from_minor(minor_units, currency),
            stock: fixture.stock,
            image: fixture.image,
        })
    }
}
