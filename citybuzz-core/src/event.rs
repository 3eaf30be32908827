//! Event and location types.
//!
//! These are the records the catalog holds and the stores persist. The
//! `date` field is the loose display string the event was posted with;
//! use `crate::event_date` to turn it into something comparable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::category::Category;
use crate::event_date::parse_event_date;

/// Opaque event identifier, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        EventId(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(EventId)
    }
}

/// A community event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    pub name: String,
    /// Display date, e.g. "1/16 @ 7 PM" (no year)
    pub date: String,
    pub location: Location,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Symbol shown on cards for seeded and feed events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Event {
    /// Create an event with a freshly assigned id.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        location: Location,
        category: Category,
    ) -> Self {
        Event {
            id: EventId::new(),
            name: name.into(),
            date: date.into(),
            location,
            category,
            description: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The event's start, with `year` filled in. None if `date` doesn't parse.
    pub fn starts_at(&self, year: i32) -> Option<chrono::NaiveDateTime> {
        parse_event_date(&self.date, year)
    }
}

// Two events are the same event iff they share an id.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

/// Geographic point. (0, 0) means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// Where an event takes place.
///
/// The address is free text and is not guaranteed to geocode to `coordinate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub area: String,
    pub city: String,
    pub full_address: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        city: impl Into<String>,
        full_address: impl Into<String>,
    ) -> Self {
        Location {
            name: name.into(),
            area: area.into(),
            city: city.into(),
            full_address: full_address.into(),
            coordinate: Coordinate::default(),
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Coordinate::new(latitude, longitude);
        self
    }

    pub fn short_display(&self) -> &str {
        &self.name
    }

    pub fn medium_display(&self) -> String {
        format!("{}, {}", self.name, self.area)
    }
}
