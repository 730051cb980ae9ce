//! Shop

use rusty_money::{Money, iso::Currency};

/// Identifier of a shop item. Numbered independently of events and rentals.
pub type ShopItemId = u32;

/// A product sold in the park's gear shop.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopItem {
    /// Unique item id
    pub id: ShopItemId,

    /// Item name
    pub name: String,

    /// Item description
    pub description: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Units available; the most a single cart may hold
    pub stock: u32,

    /// Image reference
    pub image: String,
}

impl ShopItem {
    /// Whether the item can be added to a cart at all.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Clamps a requested cart quantity into `[1, item.stock]`.
///
/// Items without stock clamp to zero, which removes them from a cart.
pub fn clamp_quantity(item: &ShopItem, requested: i64) -> u32 {
    if item.stock == 0 {
        return 0;
    }

    let requested = u32::try_from(requested.max(1)).unwrap_or(u32::MAX);

    requested.min(item.stock)
}
