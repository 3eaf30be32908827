//! Core types for City Buzz.
//!
//! This crate holds everything the presentation layer calls into:
//! - `Event`, `Location` and `Category` for community events
//! - `catalog` for the authoritative in-memory event list
//! - `query` for text, category, and date-window filtering
//! - `store` and `feed` for hydrating the catalog

pub mod catalog;
pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod event_date;
pub mod feed;
pub mod logging;
pub mod preferences;
pub mod query;
pub mod seed;
pub mod store;
pub mod submission;

// Re-export the model types at crate root for convenience
pub use category::{Category, CategoryStyle};
pub use event::{Coordinate, Event, EventId, Location};
