//! Remembered category selection for the discover screen.
//!
//! Stored as a JSON array of category labels. Unreadable data is treated as
//! "nothing selected" rather than an error.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use tracing::warn;

use crate::category::Category;
use crate::error::CityBuzzResult;

pub const PREFERENCES_FILE: &str = "categories.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPreferences {
    selected: BTreeSet<Category>,
}

impl CategoryPreferences {
    pub fn new(selected: impl IntoIterator<Item = Category>) -> Self {
        CategoryPreferences {
            selected: selected.into_iter().collect(),
        }
    }

    /// Decode from stored bytes. Corrupt data yields an empty selection.
    pub fn decode(data: &[u8]) -> Self {
        if data.is_empty() {
            return Self::default();
        }
        match serde_json::from_slice::<BTreeSet<Category>>(data) {
            Ok(selected) => CategoryPreferences { selected },
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable category preferences");
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> CityBuzzResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.selected)?)
    }

    /// Load from `path`; a missing file is an empty selection.
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(data) => Self::decode(&data),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> CityBuzzResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.encode()?)?;
        Ok(())
    }

    /// Select `category` if it isn't selected, otherwise deselect it.
    pub fn toggle(&mut self, category: Category) {
        if !self.selected.remove(&category) {
            self.selected.insert(category);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.selected.contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selection as filter input for `query::filter`.
    pub fn categories(&self) -> HashSet<Category> {
        self.selected.iter().cloned().collect()
    }
}
