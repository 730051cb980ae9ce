//! Pesqueiro prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    events::{
        Event, EventId,
        filter::{CapacityBand, EventFilter, filter_events},
    },
    fixtures::{Fixture, FixtureError},
    order::{OrderLine, OrderSummary},
    pricing::PricingError,
    registration::{FieldError, Registration, RegistrationError, RegistrationForm},
    rentals::{
        Booking, RentalError, RentalItem, RentalItemId, RentalRequest, clamp_duration,
        compute_total, confirm_rental, confirm_rental_on, is_date_blocked,
    },
    shop::{ShopItem, ShopItemId, clamp_quantity},
};
