//! Catalog
//!
//! The park's events, shop items and rental items. A catalog is built once, usually from
//! fixtures, and then handed to the filtering, cart and rental functions by reference.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    events::{Event, EventId},
    rentals::{RentalItem, RentalItemId},
    shop::{ShopItem, ShopItemId},
};

/// Errors found while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two events share an id.
    #[error("Duplicate event id: {0}")]
    DuplicateEvent(EventId),

    /// Two shop items share an id.
    #[error("Duplicate shop item id: {0}")]
    DuplicateShopItem(ShopItemId),

    /// Two rental items share an id.
    #[error("Duplicate rental item id: {0}")]
    DuplicateRentalItem(RentalItemId),

    /// An event has no capacity.
    #[error("Event {0} has zero capacity")]
    ZeroCapacity(EventId),

    /// An event has more attendees than places.
    #[error("Event {id} has {attendees} attendees but capacity {capacity}")]
    OverCapacity {
        /// Event id
        id: EventId,
        /// Current attendees
        attendees: u32,
        /// Total capacity
        capacity: u32,
    },

    /// A price uses a different currency from the catalog (item, item currency, catalog currency).
    #[error("Item {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(u32, &'static str, &'static str),
}

/// Immutable collection of everything the park offers.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
    shop_items: Vec<ShopItem>,
    rental_items: Vec<RentalItem>,

    event_index: FxHashMap<EventId, usize>,
    shop_index: FxHashMap<ShopItemId, usize>,
    rental_index: FxHashMap<RentalItemId, usize>,

    currency: &'static Currency,
}

impl Catalog {
    /// Create a catalog, checking ids, capacities and currencies.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any id is repeated within its kind, an event's
    /// attendance doesn't fit its capacity, or a price isn't in `currency`.
    pub fn new(
        events: Vec<Event>,
        shop_items: Vec<ShopItem>,
        rental_items: Vec<RentalItem>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        for event in &events {
            if event.total_capacity == 0 {
                return Err(CatalogError::ZeroCapacity(event.id));
            }

            if event.current_attendees > event.total_capacity {
                return Err(CatalogError::OverCapacity {
                    id: event.id,
                    attendees: event.current_attendees,
                    capacity: event.total_capacity,
                });
            }
        }

        let prices = shop_items
            .iter()
            .map(|item| (item.id, item.price.currency()))
            .chain(
                rental_items
                    .iter()
                    .map(|item| (item.id, item.hourly_price.currency())),
            );

        for (id, item_currency) in prices {
            if item_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    id,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
        }

        let event_index = index_by(&events, |event| event.id, CatalogError::DuplicateEvent)?;
        let shop_index = index_by(&shop_items, |item| item.id, CatalogError::DuplicateShopItem)?;
        let rental_index = index_by(
            &rental_items,
            |item| item.id,
            CatalogError::DuplicateRentalItem,
        )?;

        Ok(Catalog {
            events,
            shop_items,
            rental_items,
            event_index,
            shop_index,
            rental_index,
            currency,
        })
    }

    /// All events, in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All shop items, in catalog order.
    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    /// All rental items, in catalog order.
    pub fn rental_items(&self) -> &[RentalItem] {
        &self.rental_items
    }

    /// Look up an event by id.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.event_index
            .get(&id)
            .and_then(|&idx| self.events.get(idx))
    }

    /// Look up a shop item by id.
    pub fn shop_item(&self, id: ShopItemId) -> Option<&ShopItem> {
        self.shop_index
            .get(&id)
            .and_then(|&idx| self.shop_items.get(idx))
    }

    /// Look up a rental item by id.
    pub fn rental_item(&self, id: RentalItemId) -> Option<&RentalItem> {
        self.rental_index
            .get(&id)
            .and_then(|&idx| self.rental_items.get(idx))
    }

    /// Currency of every price in the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn index_by<T>(
    entries: &[T],
    id: impl Fn(&T) -> u32,
    duplicate: impl Fn(u32) -> CatalogError,
) -> Result<FxHashMap<u32, usize>, CatalogError> {
    let mut index = FxHashMap::default();

    for (idx, entry) in entries.iter().enumerate() {
        let id = id(entry);

        if index.insert(id, idx).is_some() {
            return Err(duplicate(id));
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::{events::test_support::event, shop::test_support::shop_item};

    use super::*;

    #[test]
    fn lookups_by_id() -> TestResult {
        let catalog = Catalog::new(
            vec![event(1, "Summit", "March 15, 2025", "9:00 AM", 200)],
            vec![
                shop_item(101, "Line", 2499, 25),
                shop_item(102, "Lures", 3999, 15),
            ],
            Vec::new(),
            USD,
        )?;

        assert_eq!(catalog.event(1).map(|event| event.id), Some(1));
        assert_eq!(catalog.shop_item(102).map(|item| item.stock), Some(15));
        assert!(catalog.shop_item(1).is_none());
        assert!(catalog.rental_item(101).is_none());
        assert_eq!(catalog.currency(), USD);

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(
            Vec::new(),
            vec![shop_item(101, "Line", 2499, 25), shop_item(101, "Lures", 3999, 15)],
            Vec::new(),
            USD,
        );

        assert_eq!(result.err(), Some(CatalogError::DuplicateShopItem(101)));
    }

    #[test]
    fn ids_may_repeat_across_kinds() -> TestResult {
        let catalog = Catalog::new(
            vec![event(1, "Summit", "March 15, 2025", "9:00 AM", 200)],
            vec![shop_item(1, "Line", 2499, 25)],
            Vec::new(),
            USD,
        )?;

        assert_eq!(catalog.events().len(), 1);
        assert_eq!(catalog.shop_items().len(), 1);

        Ok(())
    }

    #[test]
    fn over_capacity_event_is_rejected() {
        let mut night = event(4, "Night", "May 10, 2025", "6:00 PM", 120);
        night.current_attendees = 121;

        let result = Catalog::new(vec![night], Vec::new(), Vec::new(), USD);

        assert_eq!(
            result.err(),
            Some(CatalogError::OverCapacity {
                id: 4,
                attendees: 121,
                capacity: 120,
            })
        );
    }

    #[test]
    fn zero_capacity_event_is_rejected() {
        let result = Catalog::new(
            vec![event(9, "Nothing", "May 1", "", 0)],
            Vec::new(),
            Vec::new(),
            USD,
        );

        assert_eq!(result.err(), Some(CatalogError::ZeroCapacity(9)));
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let mut line = shop_item(101, "Line", 2499, 25);
        line.price = Money::from_minor(2499, GBP);

        let result = Catalog::new(Vec::new(), vec![line], Vec::new(), USD);

        assert_eq!(
            result.err(),
            Some(CatalogError::CurrencyMismatch(
                101,
                GBP.iso_alpha_code,
                USD.iso_alpha_code
            ))
        );
    }
}
