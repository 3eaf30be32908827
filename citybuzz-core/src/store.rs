//! Persistence backends for hydrating the catalog.
//!
//! The catalog only needs `load_all` (startup hydrate) and `persist`
//! (write-through on submit). `JsonFileStore` keeps every event in one
//! JSON array on disk; `MemoryStore` keeps them in process.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::{CityBuzzError, CityBuzzResult};
use crate::event::{Event, EventId};

pub const EVENTS_FILE: &str = "events.json";

pub trait EventStore {
    /// Every stored event, in stored order.
    fn load_all(&self) -> CityBuzzResult<Vec<Event>>;

    /// Store one new submission ahead of everything already stored, so a
    /// later `load_all` returns it first, as the catalog holds it.
    fn persist(&self, event: &Event) -> CityBuzzResult<()>;
}

/// Events stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Store at `<data_dir>/events.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(EVENTS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &EventId) -> CityBuzzResult<bool> {
        let mut events = self.load_all()?;
        let before = events.len();
        events.retain(|e| &e.id != id);
        let removed = events.len() != before;
        if removed {
            self.save(&events)?;
        }
        Ok(removed)
    }

    /// Replace the stored event sharing `event.id`. No-op when it isn't stored.
    pub fn update(&self, event: &Event) -> CityBuzzResult<bool> {
        let mut events = self.load_all()?;
        let Some(slot) = events.iter_mut().find(|e| e.id == event.id) else {
            return Ok(false);
        };
        *slot = event.clone();
        self.save(&events)?;
        Ok(true)
    }

    /// Write `events` when nothing is stored yet. Returns whether it did.
    pub fn seed_if_empty(&self, events: &[Event]) -> CityBuzzResult<bool> {
        if !self.load_all()?.is_empty() {
            return Ok(false);
        }
        self.save(events)?;
        Ok(true)
    }

    fn save(&self, events: &[Event]) -> CityBuzzResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(events)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = events.len(), "Saved events");
        Ok(())
    }
}

impl EventStore for JsonFileStore {
    fn load_all(&self) -> CityBuzzResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            CityBuzzError::Store(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn persist(&self, event: &Event) -> CityBuzzResult<()> {
        let mut events = self.load_all()?;
        events.insert(0, event.clone());
        self.save(&events)
    }
}

/// In-process store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
}

impl MemoryStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        MemoryStore {
            events: Mutex::new(events),
        }
    }
}

impl EventStore for MemoryStore {
    fn load_all(&self) -> CityBuzzResult<Vec<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn persist(&self, event: &Event) -> CityBuzzResult<()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(0, event.clone());
        Ok(())
    }
}
