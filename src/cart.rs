//! Cart

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    order::OrderSummary,
    pricing::{PricingError, extended_price, sum_prices},
    shop::{ShopItem, ShopItemId},
};

/// Errors related to cart mutations or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The item has no stock, so it can't be added.
    #[error("Item {0} is out of stock")]
    OutOfStock(ShopItemId),

    /// A cart line refers to an item that isn't in the catalog.
    #[error("Item {0} not found in catalog")]
    UnknownItem(ShopItemId),

    /// An empty cart can't be turned into an order.
    #[error("Cart is empty")]
    Empty,

    /// Price arithmetic failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One shop item and the quantity requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartLine {
    /// Shop item id
    pub item: ShopItemId,

    /// Requested quantity, always at least 1
    pub quantity: u32,
}

/// Shopping cart holding at most one line per shop item.
///
/// Totals are derived from the lines and the catalog on every read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add one unit of `item`, creating its line if needed.
    ///
    /// The line never grows beyond `item.stock`; adding to a full line leaves it unchanged.
    /// Returns the line's quantity after the addition.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfStock`] if the item has no stock.
    pub fn add(&mut self, item: &ShopItem) -> Result<u32, CartError> {
        if !item.in_stock() {
            warn!(item = item.id, "rejected add to cart, item out of stock");
            return Err(CartError::OutOfStock(item.id));
        }

        let quantity = match self.line_mut(item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1).min(item.stock);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    item: item.id,
                    quantity: 1,
                });
                1
            }
        };

        debug!(item = item.id, quantity, "added to cart");

        Ok(quantity)
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Anything else replaces the line's
    /// quantity, or appends a new line. Stock is not checked here, see
    /// [`clamp_quantity`](crate::shop::clamp_quantity).
    pub fn set_quantity(&mut self, item: ShopItemId, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity.max(0)) else {
            self.upsert(item, u32::MAX);
            return;
        };

        if quantity == 0 {
            self.lines.retain(|line| line.item != item);
            debug!(item, "removed from cart");
        } else {
            self.upsert(item, quantity);
        }
    }

    /// Remove the line for `item`, if present.
    pub fn remove(&mut self, item: ShopItemId) {
        self.set_quantity(item, 0);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity held for `item`, zero if absent.
    pub fn quantity_of(&self, item: ShopItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item == item)
            .map_or(0, |line| line.quantity)
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of quantity × unit price over every line, priced from `catalog`.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownItem`]: a line refers to an item missing from the catalog.
    /// - [`CartError::Pricing`]: a line total overflowed or used another currency.
    pub fn subtotal(&self, catalog: &Catalog) -> Result<Money<'static, Currency>, CartError> {
        let line_totals = self
            .lines
            .iter()
            .map(|line| {
                let item = catalog
                    .shop_item(line.item)
                    .ok_or(CartError::UnknownItem(line.item))?;

                Ok(extended_price(&item.price, line.quantity)?)
            })
            .collect::<Result<SmallVec<[_; 8]>, CartError>>()?;

        Ok(sum_prices(line_totals, catalog.currency())?)
    }

    /// Turn the cart into an order summary, then empty it.
    ///
    /// The order is a reservation; payment happens in person at the store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] for an empty cart, or any error from pricing the lines.
    /// The cart is left untouched on error.
    pub fn finalize(&mut self, catalog: &Catalog) -> Result<OrderSummary, CartError> {
        if self.is_empty() {
            warn!("rejected finalizing an empty cart");
            return Err(CartError::Empty);
        }

        let summary = OrderSummary::from_cart(self, catalog)?;

        self.clear();

        info!(
            lines = summary.lines().len(),
            total_items = summary.total_items(),
            subtotal = %summary.subtotal(),
            "order finalized"
        );

        Ok(summary)
    }

    fn line_mut(&mut self, item: ShopItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item == item)
    }

    fn upsert(&mut self, item: ShopItemId, quantity: u32) {
        match self.line_mut(item) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine { item, quantity }),
        }

        debug!(item, quantity, "set cart quantity");
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{
        catalog::Catalog,
        shop::{clamp_quantity, test_support::shop_item},
    };

    use super::*;

    fn catalog() -> TestResult<Catalog> {
        Ok(Catalog::new(
            Vec::new(),
            vec![
                shop_item(101, "Fishing Line Premium 500m", 2499, 25),
                shop_item(107, "Hook Set - 100 Pieces", 1299, 40),
                shop_item(106, "Waterproof Tackle Bag", 5499, 2),
                shop_item(108, "Fishing Hat with UV Protection", 2299, 0),
            ],
            Vec::new(),
            USD,
        )?)
    }

    fn item(catalog: &Catalog, id: ShopItemId) -> TestResult<&ShopItem> {
        Ok(catalog.shop_item(id).ok_or(CartError::UnknownItem(id))?)
    }

    #[test]
    fn adding_same_item_twice_merges_lines() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.add(item(&catalog, 101)?)?;
        let quantity = cart.add(item(&catalog, 101)?)?;

        assert_eq!(quantity, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn add_stops_at_stock() -> TestResult {
        let catalog = catalog()?;
        let bag = item(&catalog, 106)?;
        let mut cart = Cart::new();

        cart.add(bag)?;
        cart.add(bag)?;
        let quantity = cart.add(bag)?;

        assert_eq!(quantity, 2);
        assert_eq!(cart.quantity_of(106), 2);

        Ok(())
    }

    #[test]
    fn add_out_of_stock_is_rejected() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        let result = cart.add(item(&catalog, 108)?);

        assert_eq!(result, Err(CartError::OutOfStock(108)));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn subtotal_sums_quantity_times_price() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.add(item(&catalog, 101)?)?;
        cart.add(item(&catalog, 101)?)?;
        cart.add(item(&catalog, 107)?)?;

        let subtotal = cart.subtotal(&catalog)?;

        assert_eq!(subtotal, Money::from_minor(6297, USD));
        assert_eq!(subtotal.to_string(), "$62.97");

        Ok(())
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(Cart::new().subtotal(&catalog)?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn subtotal_with_unknown_item_errors() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.set_quantity(999, 1);

        assert_eq!(cart.subtotal(&catalog), Err(CartError::UnknownItem(999)));

        Ok(())
    }

    #[test]
    fn set_quantity_zero_removes_line() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.add(item(&catalog, 101)?)?;
        cart.add(item(&catalog, 107)?)?;
        cart.set_quantity(101, 0);

        assert_eq!(cart.lines(), &[CartLine { item: 107, quantity: 1 }]);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.subtotal(&catalog)?, Money::from_minor(1299, USD));

        Ok(())
    }

    #[test]
    fn set_quantity_negative_removes_and_absent_is_noop() {
        let mut cart = Cart::new();

        cart.set_quantity(101, 3);
        cart.set_quantity(101, -1);
        cart.set_quantity(107, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_upserts_and_keeps_order() {
        let mut cart = Cart::new();

        cart.set_quantity(107, 1);
        cart.set_quantity(101, 4);
        cart.set_quantity(107, 3);

        assert_eq!(
            cart.lines(),
            &[
                CartLine { item: 107, quantity: 3 },
                CartLine { item: 101, quantity: 4 },
            ]
        );
    }

    #[test]
    fn stepper_uses_clamped_quantities() -> TestResult {
        let catalog = catalog()?;
        let bag = item(&catalog, 106)?;
        let mut cart = Cart::new();

        cart.add(bag)?;
        cart.set_quantity(bag.id, i64::from(clamp_quantity(bag, 10)));

        assert_eq!(cart.quantity_of(bag.id), 2);

        Ok(())
    }

    #[test]
    fn remove_drops_line() {
        let mut cart = Cart::new();

        cart.set_quantity(101, 2);
        cart.remove(101);

        assert_eq!(cart.quantity_of(101), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.set_quantity(101, 2);

        cart.clear();
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn finalize_builds_summary_and_clears() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.add(item(&catalog, 101)?)?;
        cart.add(item(&catalog, 101)?)?;
        cart.add(item(&catalog, 107)?)?;

        let summary = cart.finalize(&catalog)?;

        assert_eq!(summary.total_items(), 3);
        assert_eq!(summary.subtotal(), Money::from_minor(6297, USD));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn finalize_empty_cart_errors() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        assert_eq!(cart.finalize(&catalog).err(), Some(CartError::Empty));

        Ok(())
    }

    #[test]
    fn finalize_failure_leaves_cart_untouched() -> TestResult {
        let catalog = catalog()?;
        let mut cart = Cart::new();

        cart.set_quantity(999, 1);

        assert_eq!(
            cart.finalize(&catalog).err(),
            Some(CartError::UnknownItem(999))
        );
        assert_eq!(cart.quantity_of(999), 1);

        Ok(())
    }
}
