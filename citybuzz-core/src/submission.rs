//! Turning a post form into an `Event`.
//!
//! The catalog accepts whatever it's given, so required fields are checked
//! here, before `EventCatalog::submit` is ever called.

use chrono::NaiveDateTime;
use std::fmt;
use thiserror::Error;

use crate::category::Category;
use crate::event::{Coordinate, Event, EventId, Location};
use crate::event_date::format_event_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Venue,
    Area,
    Address,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            RequiredField::Name => "Event Name",
            RequiredField::Venue => "Venue Name",
            RequiredField::Area => "Area",
            RequiredField::Address => "Address",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw, unvalidated input from the post form.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub starts_at: NaiveDateTime,
    pub venue: String,
    pub area: String,
    pub address: String,
    pub city: String,
    pub category: Category,
    pub description: String,
    pub coordinate: Coordinate,
}

impl EventDraft {
    /// Empty draft in `city` at `coordinate`, defaulting to Food & Drinks
    /// like the post form does.
    pub fn new(starts_at: NaiveDateTime, city: impl Into<String>, coordinate: Coordinate) -> Self {
        EventDraft {
            name: String::new(),
            starts_at,
            venue: String::new(),
            area: String::new(),
            address: String::new(),
            city: city.into(),
            category: Category::FoodAndDrinks,
            description: String::new(),
            coordinate,
        }
    }

    /// Check required fields. Every missing field is reported, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Venue, &self.venue),
            (RequiredField::Area, &self.area),
            (RequiredField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Validate and build the event, with a fresh id.
    pub fn into_event(self) -> Result<Event, ValidationError> {
        self.validate()?;

        let description = self.description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        Ok(Event {
            id: EventId::new(),
            name: self.name.trim().to_string(),
            date: format_event_date(self.starts_at),
            location: Location {
                name: self.venue.trim().to_string(),
                area: self.area.trim().to_string(),
                city: self.city,
                full_address: self.address.trim().to_string(),
                coordinate: self.coordinate,
            },
            category: self.category,
            description,
            image: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> EventDraft {
        let starts_at = NaiveDate::from_ymd_opt(2026, 2, 20)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        let mut draft = EventDraft::new(starts_at, "Kalamazoo", Coordinate::new(42.2917, -85.5872));
        draft.name = "Community Food Drive".into();
        draft.venue = "Bronson Park".into();
        draft.area = "Downtown".into();
        draft.address = "200 S Rose St, Kalamazoo, MI 49007".into();
        draft.category = Category::Charity;
        draft
    }

    #[test]
    fn test_valid_draft_becomes_event() {
        let event = draft().into_event().unwrap();
        assert_eq!(event.name, "Community Food Drive");
        assert_eq!(event.date, "2/20 @ 11 AM");
        assert_eq!(event.location.name, "Bronson Park");
        assert_eq!(event.location.city, "Kalamazoo");
        assert_eq!(event.location.coordinate, Coordinate::new(42.2917, -85.5872));
        assert_eq!(event.category, Category::Charity);
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let mut d = draft();
        d.name = String::new();
        d.area = "   ".into();
        d.address = String::new();

        let err = d.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                RequiredField::Name,
                RequiredField::Area,
                RequiredField::Address
            ])
        );
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Event Name, Area, Address"
        );
    }

    #[test]
    fn test_description_is_optional() {
        let mut d = draft();
        d.description = "  Bring canned goods  ".into();
        let event = d.into_event().unwrap();
        assert_eq!(event.description.as_deref(), Some("Bring canned goods"));
    }

    #[test]
    fn test_each_draft_gets_a_new_id() {
        let a = draft().into_event().unwrap();
        let b = draft().into_event().unwrap();
        assert_ne!(a.id, b.id);
    }
}
