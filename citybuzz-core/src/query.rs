//! Derived views over a catalog snapshot.
//!
//! Nothing here mutates the catalog: every function takes the events it
//! should look at and returns a new, stably ordered `Vec`.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::category::Category;
use crate::event::Event;

/// Text and category filter used by the discover screen.
///
/// An event matches `query` when it is a case-insensitive substring of the
/// event name, venue name, or area. An empty query or an empty category
/// set matches everything; with both empty the input comes back as-is.
pub fn filter(events: &[Event], query: &str, categories: &HashSet<Category>) -> Vec<Event> {
    if query.is_empty() && categories.is_empty() {
        return events.to_vec();
    }

    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|e| matches_text(e, &needle) && matches_category(e, categories))
        .cloned()
        .collect()
}

fn matches_text(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || [&event.name, &event.location.name, &event.location.area]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category(event: &Event, categories: &HashSet<Category>) -> bool {
    categories.is_empty() || categories.contains(&event.category)
}

/// Whether an event starting at `starts_at` still counts as current.
///
/// Anything later today is current, and so is anything earlier today:
/// today's events stay listed for the whole day.
pub fn is_current(starts_at: NaiveDateTime, now: NaiveDateTime) -> bool {
    starts_at >= now || starts_at.date() == now.date()
}

/// Events happening today or later, using `now`'s year for every event.
///
/// Events whose date doesn't parse are left out.
pub fn current(events: &[Event], now: NaiveDateTime) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            e.starts_at(now.year())
                .is_some_and(|starts_at| is_current(starts_at, now))
        })
        .cloned()
        .collect()
}

/// Events on the given calendar day. Events whose date doesn't parse are left out.
pub fn on_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.starts_at(day.year()).is_some_and(|s| s.date() == day))
        .cloned()
        .collect()
}

/// The first `count` events, for the featured carousel.
pub fn featured(events: &[Event], count: usize) -> &[Event] {
    &events[..count.min(events.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Stable chronological sort. Events whose date doesn't parse go last
/// in either direction.
pub fn sort_by_date(events: &mut [Event], year: i32, direction: Direction) {
    events.sort_by(|a, b| {
        match (a.starts_at(year), b.starts_at(year)) {
            (Some(a), Some(b)) => match direction {
                Direction::Ascending => a.cmp(&b),
                Direction::Descending => b.cmp(&a),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Date windows offered by the home feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Today,
    Tomorrow,
    On(NaiveDate),
    /// Today and everything after it
    Upcoming,
}

impl DateWindow {
    pub fn apply(&self, events: &[Event], now: NaiveDateTime) -> Vec<Event> {
        let today = now.date();
        match self {
            DateWindow::Today => on_day(events, today),
            DateWindow::Tomorrow => on_day(events, today + Duration::days(1)),
            DateWindow::On(day) => on_day(events, *day),
            DateWindow::Upcoming => current(events, now),
        }
    }
}

/// Text, category and date-window constraints applied together.
///
/// The default query matches every event.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub text: String,
    pub categories: HashSet<Category>,
    pub window: Option<DateWindow>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn apply(&self, events: &[Event], now: NaiveDateTime) -> Vec<Event> {
        let matched = filter(events, &self.text, &self.categories);
        match &self.window {
            Some(window) => window.apply(&matched, now),
            None => matched,
        }
    }
}
