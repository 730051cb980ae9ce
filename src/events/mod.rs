//! Events

pub mod filter;

/// Identifier of an event in the catalog.
pub type EventId = u32;

/// A scheduled event at the park.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Unique event id
    pub id: EventId,

    /// Event title
    pub title: String,

    /// Human readable date, e.g. "March 15, 2025" or "June 20-22, 2025"
    pub date: String,

    /// Human readable time range, e.g. "9:00 AM - 6:00 PM"
    pub time: String,

    /// Where the event takes place
    pub location: String,

    /// Event description
    pub description: String,

    /// Attendance rules
    pub rules: String,

    /// Number of people already registered
    pub current_attendees: u32,

    /// Maximum number of attendees
    pub total_capacity: u32,

    /// Image reference
    pub image: String,
}

impl Event {
    /// Spaces still open for registration.
    pub fn available_spaces(&self) -> u32 {
        self.total_capacity.saturating_sub(self.current_attendees)
    }

    /// Whether every space has been taken.
    pub fn is_full(&self) -> bool {
        self.available_spaces() == 0
    }
}
