//! Event Fixtures

use serde::Deserialize;

use crate::events::Event;

/// Wrapper for events in YAML
#[derive(Debug, Deserialize)]
pub struct EventsFixture {
    /// Events, in catalog order
    pub events: Vec<EventFixture>,
}

/// Event Fixture
#[derive(Debug, Deserialize)]
pub struct EventFixture {
    /// Event id
    pub id: u32,

    /// Event title
    pub title: String,

    /// Human readable date (e.g., "March 15, 2025")
    pub date: String,

    /// Human readable time range (e.g., "9:00 AM - 6:00 PM")
    pub time: String,

    /// Location
    pub location: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Attendance rules
    #[serde(default)]
    pub rules: String,

    /// Attendees already registered
    #[serde(default)]
    pub current_attendees: u32,

    /// Total capacity
    pub total_capacity: u32,

    /// Image reference
    #[serde(default)]
    pub image: String,
}

impl From<EventFixture> for Event {
    fn from(fixture: EventFixture) -> Self {
        Event {
            id: fixture.id,
            title: fixture.title,
            date: fixture.date,
            time: fixture.time,
            location: fixture.location,
            description: fixture.description,
            rules: fixture.rules,
            current_attendees: fixture.current_attendees,
            total_capacity: fixture.total_capacity,
            image: fixture.image,
        }
    }
}
