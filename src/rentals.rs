//! Gear Rentals
//!
//! Rental items are priced per hour. A booking is confirmed for a single calendar day,
//! starting at a time of day and lasting a whole number of hours.

use jiff::civil::{Date, Time, time};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{info, warn};

use crate::pricing::{PricingError, extended_price};

/// Identifier of a rental item. Numbered independently of events and shop items.
pub type RentalItemId = u32;

/// Shortest bookable duration, in hours.
pub const MIN_DURATION_HOURS: u32 = 1;

/// Longest bookable duration, in hours.
pub const MAX_DURATION_HOURS: u32 = 24;

/// Earliest start time accepted by [`confirm_rental_on`].
pub const OPENING_TIME: Time = time(6, 0, 0, 0);

/// Latest start time accepted by [`confirm_rental_on`].
pub const CLOSING_TIME: Time = time(20, 0, 0, 0);

/// Start time used when none is chosen.
pub const DEFAULT_START: Time = time(9, 0, 0, 0);

/// Errors from confirming a rental.
#[derive(Debug, Error, PartialEq)]
pub enum RentalError {
    /// No rental date was chosen.
    #[error("Please select a rental date")]
    NoDateSelected,

    /// The item can't be booked on the chosen date.
    #[error("Item {item} is unavailable on {date}")]
    DateUnavailable {
        /// Rental item id
        item: RentalItemId,
        /// Requested date
        date: Date,
    },

    /// The chosen date is before today.
    #[error("{date} is in the past")]
    DateInPast {
        /// Requested date
        date: Date,
    },

    /// The start time is outside opening hours.
    #[error("Start time {0} is outside opening hours (06:00 to 20:00)")]
    StartOutsideOpeningHours(Time),

    /// The request is for a different item.
    #[error("Request is for item {requested}, not item {item}")]
    ItemMismatch {
        /// Item the request names
        requested: RentalItemId,
        /// Item being confirmed
        item: RentalItemId,
    },

    /// Price arithmetic failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A piece of gear available to rent by the hour.
#[derive(Clone, Debug, PartialEq)]
pub struct RentalItem {
    /// Unique item id
    pub id: RentalItemId,

    /// Item name
    pub name: String,

    /// Short description
    pub description: String,

    /// Long description
    pub full_description: String,

    /// Price per hour
    pub hourly_price: Money<'static, Currency>,

    /// Units on hand. Informational only; bookings don't change it.
    pub available: u32,

    /// Image reference
    pub image: String,

    /// Calendar days on which the item can't be booked
    pub unavailable_dates: Vec<Date>,
}

/// A rental being put together by a customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentalRequest {
    /// Rental item id
    pub item: RentalItemId,

    /// Chosen day, if any
    pub date: Option<Date>,

    /// Start time of day
    pub start: Time,

    /// Duration in whole hours
    pub hours: u32,
}

impl RentalRequest {
    /// A request for `item` with no date, starting at 09:00 for one hour.
    pub fn new(item: RentalItemId) -> Self {
        RentalRequest {
            item,
            date: None,
            start: DEFAULT_START,
            hours: MIN_DURATION_HOURS,
        }
    }

    /// Set the rental date.
    #[must_use]
    pub fn on(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the start time.
    #[must_use]
    pub fn starting_at(mut self, start: Time) -> Self {
        self.start = start;
        self
    }

    /// Set the duration, clamped into the bookable range.
    #[must_use]
    pub fn for_hours(mut self, hours: i64) -> Self {
        self.hours = clamp_duration(hours);
        self
    }
}

/// A confirmed rental.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Booking {
    /// Rental item id
    pub item: RentalItemId,

    /// Rental day
    pub date: Date,

    /// Start time of day
    pub start: Time,

    /// Duration in whole hours
    pub hours: u32,

    /// Hourly price × hours
    pub total: Money<'static, Currency>,
}

/// Clamps a requested duration into `[1, 24]` hours.
pub fn clamp_duration(hours: i64) -> u32 {
    let hours = hours.clamp(i64::from(MIN_DURATION_HOURS), i64::from(MAX_DURATION_HOURS));

    u32::try_from(hours).unwrap_or(MIN_DURATION_HOURS)
}

/// Whether `item` can't be booked on `date`.
pub fn is_date_blocked(item: &RentalItem, date: Date) -> bool {
    item.unavailable_dates.contains(&date)
}

/// Hourly price × hours. No range check is made on `hours`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the total doesn't fit in minor units.
pub fn compute_total(
    item: &RentalItem,
    hours: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    extended_price(&item.hourly_price, hours)
}

/// Confirm a rental of `item`.
///
/// The item's `available` count is not touched.
///
/// # Errors
///
/// - [`RentalError::ItemMismatch`]: the request names a different item.
/// - [`RentalError::NoDateSelected`]: the request has no date.
/// - [`RentalError::DateUnavailable`]: the date is one of the item's blackout dates.
/// - [`RentalError::Pricing`]: the total overflowed.
pub fn confirm_rental(item: &RentalItem, request: &RentalRequest) -> Result<Booking, RentalError> {
    if request.item != item.id {
        return Err(RentalError::ItemMismatch {
            requested: request.item,
            item: item.id,
        });
    }

    let Some(date) = request.date else {
        warn!(item = item.id, "rental rejected, no date selected");
        return Err(RentalError::NoDateSelected);
    };

    if is_date_blocked(item, date) {
        warn!(item = item.id, %date, "rental rejected, date unavailable");
        return Err(RentalError::DateUnavailable {
            item: item.id,
            date,
        });
    }

    let total = compute_total(item, request.hours)?;

    info!(
        item = item.id,
        %date,
        start = %request.start,
        hours = request.hours,
        %total,
        "rental confirmed"
    );

    Ok(Booking {
        item: item.id,
        date,
        start: request.start,
        hours: request.hours,
        total,
    })
}

/// Confirm a rental as of `today`.
///
/// On top of [`confirm_rental`], dates before `today` and start times outside
/// [`OPENING_TIME`]..=[`CLOSING_TIME`] are rejected. A mismatched item or a missing
/// date is reported before either of those. Today itself can be booked.
///
/// # Errors
///
/// - [`RentalError::ItemMismatch`]: the request names a different item.
/// - [`RentalError::NoDateSelected`]: the request has no date.
/// - [`RentalError::DateInPast`]: the date is before `today`.
/// - [`RentalError::StartOutsideOpeningHours`]: the start time is outside opening hours.
/// - Any other error from [`confirm_rental`].
pub fn confirm_rental_on(
    item: &RentalItem,
    request: &RentalRequest,
    today: Date,
) -> Result<Booking, RentalError> {
    if request.item != item.id {
        return Err(RentalError::ItemMismatch {
            requested: request.item,
            item: item.id,
        });
    }

    let Some(date) = request.date else {
        warn!(item = item.id, "rental rejected, no date selected");
        return Err(RentalError::NoDateSelected);
    };

    if date < today {
        warn!(item = item.id, %date, %today, "rental rejected, date in the past");
        return Err(RentalError::DateInPast { date });
    }

    if !(OPENING_TIME..=CLOSING_TIME).contains(&request.start) {
        return Err(RentalError::StartOutsideOpeningHours(request.start));
    }

    confirm_rental(item, request)
}
