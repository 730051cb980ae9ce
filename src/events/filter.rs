//! Event Filtering

use std::str::FromStr;

use jiff::civil::Date;
use thiserror::Error;
use tracing::debug;

use crate::events::Event;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Coarse bucket derived from an event's total capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapacityBand {
    /// Any capacity
    #[default]
    All,

    /// Fewer than 150 places
    Small,

    /// Between 150 and 500 places, inclusive
    Medium,

    /// More than 500 places
    Large,
}

impl CapacityBand {
    /// Maps a band label to a band.
    ///
    /// Unknown labels place no constraint on capacity, so they map to [`CapacityBand::All`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Whether the given capacity falls inside this band.
    pub fn contains(self, capacity: u32) -> bool {
        match self {
            CapacityBand::All => true,
            CapacityBand::Small => capacity < 150,
            CapacityBand::Medium => (150..=500).contains(&capacity),
            CapacityBand::Large => capacity > 500,
        }
    }
}

impl FromStr for CapacityBand {
    type Err = UnknownCapacityBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CapacityBand::All),
            "small" => Ok(CapacityBand::Small),
            "medium" => Ok(CapacityBand::Medium),
            "large" => Ok(CapacityBand::Large),
            _ => Err(UnknownCapacityBand(s.to_string())),
        }
    }
}

/// A capacity band label that isn't one of `all`, `small`, `medium` or `large`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown capacity band: {0}")]
pub struct UnknownCapacityBand(pub String);

/// Criteria used to narrow down the event catalog.
///
/// Every criterion left empty (or [`CapacityBand::All`]) places no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring of the event title
    pub name: String,

    /// Calendar date the event should fall on; only month and day are compared
    pub date: Option<Date>,

    /// Capacity band
    pub capacity: CapacityBand,

    /// Case-insensitive substring of the event time range
    pub time: String,
}

impl EventFilter {
    /// Whether any criterion is constraining the results.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
            || self.date.is_some()
            || self.capacity != CapacityBand::All
            || !self.time.is_empty()
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = EventFilter::default();
    }

    /// Whether a single event passes every active criterion.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_name(event)
            && self.matches_date(event)
            && self.capacity.contains(event.total_capacity)
            && self.matches_time(event)
    }

    fn matches_name(&self, event: &Event) -> bool {
        self.name.is_empty() || contains_ignore_case(&event.title, &self.name)
    }

    fn matches_time(&self, event: &Event) -> bool {
        self.time.is_empty() || contains_ignore_case(&event.time, &self.time)
    }

    // Events whose date can't be read are let through.
    fn matches_date(&self, event: &Event) -> bool {
        let Some(wanted) = self.date else {
            return true;
        };

        match parse_month_day(&event.date) {
            Some((month, day)) => wanted.month() == month && wanted.day() == day,
            None => {
                debug!(event = event.id, date = %event.date, "event date not parseable, keeping event");
                true
            }
        }
    }
}

/// Returns the events matching `filter`, in catalog order.
pub fn filter_events<'a>(catalog: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    let matches: Vec<&Event> = catalog.iter().filter(|event| filter.matches(event)).collect();

    debug!(
        catalog = catalog.len(),
        matches = matches.len(),
        active = filter.is_active(),
        "filtered events"
    );

    matches
}

/// Reads the month and day from the first comma-separated segment of a
/// human readable date such as "March 15, 2025".
///
/// Returns `None` when the segment isn't exactly a full month name followed by
/// a valid day of that month. Ranges such as "June 20-22" are not understood.
pub fn parse_month_day(date: &str) -> Option<(i8, i8)> {
    let segment = date.split(',').next()?.trim();
    let mut parts = segment.split_whitespace();

    let month_name = parts.next()?;
    let day_text = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    let month = MONTHS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(month_name))
        .and_then(|idx| i8::try_from(idx + 1).ok())?;

    let day = day_text.parse::<i8>().ok()?;

    // 2000 is a leap year, so February 29 is accepted.
    Date::new(2000, month, day).ok()?;

    Some((month, day))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
