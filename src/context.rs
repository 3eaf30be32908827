//! Application state shared by every command.

use std::path::PathBuf;

use anyhow::Result;
use citybuzz_core::catalog::EventCatalog;
use citybuzz_core::config::CityBuzzConfig;
use citybuzz_core::preferences::{CategoryPreferences, PREFERENCES_FILE};
use citybuzz_core::seed::sample_events;
use citybuzz_core::store::{EventStore, JsonFileStore, MemoryStore};
use tracing::info;

/// The catalog plus the store it was hydrated from, created once per run.
pub struct AppContext {
    pub config: CityBuzzConfig,
    pub catalog: EventCatalog,
    pub store: Box<dyn EventStore>,
    ephemeral: bool,
}

impl AppContext {
    pub fn load(config: CityBuzzConfig, ephemeral: bool) -> Result<Self> {
        let store: Box<dyn EventStore> = if ephemeral {
            Box::new(MemoryStore::with_events(sample_events()))
        } else {
            let store = JsonFileStore::in_dir(&config.data_path());
            if store.seed_if_empty(&sample_events())? {
                info!(path = %store.path().display(), "Seeded event store with sample events");
            }
            Box::new(store)
        };

        let catalog = EventCatalog::new();
        catalog.hydrate(store.as_ref())?;

        Ok(AppContext {
            config,
            catalog,
            store,
            ephemeral,
        })
    }

    fn preferences_path(&self) -> PathBuf {
        self.config.data_path().join(PREFERENCES_FILE)
    }

    pub fn preferences(&self) -> CategoryPreferences {
        if self.ephemeral {
            return CategoryPreferences::default();
        }
        CategoryPreferences::load(&self.preferences_path())
    }

    pub fn save_preferences(&self, preferences: &CategoryPreferences) -> Result<()> {
        if self.ephemeral {
            return Ok(());
        }
        preferences.save(&self.preferences_path())?;
        Ok(())
    }
}
