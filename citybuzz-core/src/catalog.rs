//! The authoritative in-memory event list.
//!
//! One `EventCatalog` is created at startup and shared (via `Arc` or a
//! plain reference) with everything that reads or posts events. Mutations
//! take the write lock for the whole change, so readers always see either
//! the state before or after a `submit`/`append`, never something in
//! between. Observers subscribe to `CatalogChange` notifications and
//! re-derive their own filtered views.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::{CityBuzzError, CityBuzzResult};
use crate::event::{Event, EventId};
use crate::store::EventStore;

/// Buffered notifications per subscriber before the oldest are dropped.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Published after every catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    /// A user submission was inserted at the front
    Submitted(EventId),
    /// A single event was appended at the back
    Appended(EventId),
    /// A bulk load appended this many events
    Loaded(usize),
}

pub struct EventCatalog {
    events: RwLock<Vec<Event>>,
    changes: broadcast::Sender<CatalogChange>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCatalog {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        EventCatalog {
            events: RwLock::new(Vec::new()),
            changes,
        }
    }

    /// Build a catalog pre-filled with `events` in the given order.
    pub fn with_events(events: Vec<Event>) -> Self {
        let catalog = Self::new();
        *catalog.write() = events;
        catalog
    }

    /// Receive a notification for every subsequent mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogChange> {
        self.changes.subscribe()
    }

    // READS:

    /// Snapshot of every event, submitted events first.
    pub fn all(&self) -> Vec<Event> {
        self.read().clone()
    }

    pub fn get(&self, id: &EventId) -> Option<Event> {
        self.read().iter().find(|e| &e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // MUTATIONS:

    /// Insert a user submission at the front.
    ///
    /// The catalog doesn't validate or deduplicate; see `crate::submission`.
    pub fn submit(&self, event: Event) {
        let id = event.id;
        debug!(%id, name = %event.name, "Submitting event");
        self.write().insert(0, event);
        self.publish(CatalogChange::Submitted(id));
    }

    /// Insert a submission and write it through to `store`.
    ///
    /// A failed write is logged and otherwise ignored; the event stays in
    /// the catalog either way.
    pub fn submit_and_persist(&self, event: Event, store: &dyn EventStore) {
        if let Err(e) = store.persist(&event) {
            warn!(id = %event.id, error = %e, "Could not persist submitted event");
        }
        self.submit(event);
    }

    /// Add an event at the back (seeding only).
    pub fn append(&self, event: Event) {
        let id = event.id;
        self.write().push(event);
        self.publish(CatalogChange::Appended(id));
    }

    /// Append a batch in input order with a single notification.
    pub fn extend(&self, events: Vec<Event>) -> usize {
        let count = events.len();
        self.write().extend(events);
        self.publish(CatalogChange::Loaded(count));
        count
    }

    /// Bulk-load everything from `store`.
    ///
    /// On failure the catalog is left exactly as it was.
    pub fn hydrate(&self, store: &dyn EventStore) -> CityBuzzResult<usize> {
        let events = store
            .load_all()
            .map_err(|e| CityBuzzError::LoadFailure(e.to_string()))?;
        let count = self.extend(events);
        info!(count, "Hydrated event catalog");
        Ok(count)
    }

    fn publish(&self, change: CatalogChange) {
        // No receivers is fine: nobody is watching yet.
        let _ = self.changes.send(change);
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        self.events.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.events.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::event::Location;
    use crate::query::filter;
    use crate::store::MemoryStore;
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn event(name: &str, category: Category) -> Event {
        let location = Location::new("Venue", "Downtown", "Kalamazoo", "1 Main St");
        Event::new(name, "2/14 @ 7 PM", location, category)
    }

    fn names(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.name.as_str()).collect()
    }

    struct FailingStore;

    impl EventStore for FailingStore {
        fn load_all(&self) -> CityBuzzResult<Vec<Event>> {
            Err(CityBuzzError::Store("backend offline".into()))
        }

        fn persist(&self, _event: &Event) -> CityBuzzResult<()> {
            Err(CityBuzzError::Store("backend offline".into()))
        }
    }

    #[test]
    fn test_submit_inserts_at_front() {
        let catalog = EventCatalog::with_events(vec![
            event("A", Category::Sports),
            event("B", Category::Sports),
        ]);
        catalog.submit(event("X", Category::Charity));
        assert_eq!(names(&catalog.all()), vec!["X", "A", "B"]);
    }

    #[test]
    fn test_append_inserts_at_back() {
        let catalog = EventCatalog::with_events(vec![
            event("A", Category::Sports),
            event("B", Category::Sports),
        ]);
        catalog.append(event("X", Category::Charity));
        assert_eq!(names(&catalog.all()), vec!["A", "B", "X"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = EventCatalog::new();
        let submitted = event("Submitted", Category::Comedy);
        let appended = event("Appended", Category::Markets);
        catalog.submit(submitted.clone());
        catalog.append(appended.clone());

        assert_eq!(catalog.get(&submitted.id).map(|e| e.name), Some("Submitted".into()));
        assert_eq!(catalog.get(&appended.id).map(|e| e.name), Some("Appended".into()));
        assert!(catalog.get(&EventId::new()).is_none());
    }

    #[test]
    fn test_submit_does_not_deduplicate() {
        let catalog = EventCatalog::new();
        let e = event("Twice", Category::Community);
        catalog.submit(e.clone());
        catalog.submit(e);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_catalog() {
        let catalog = EventCatalog::with_events(vec![event("A", Category::Sports)]);
        let mut snapshot = catalog.all();
        snapshot.clear();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_observers_are_notified() {
        let catalog = EventCatalog::new();
        let mut rx = catalog.subscribe();

        let submitted = event("S", Category::Sports);
        let appended = event("A", Category::Sports);
        let submitted_id = submitted.id;
        let appended_id = appended.id;

        catalog.submit(submitted);
        catalog.append(appended);
        catalog.extend(vec![event("B", Category::Comedy), event("C", Category::Comedy)]);

        assert_eq!(rx.try_recv().unwrap(), CatalogChange::Submitted(submitted_id));
        assert_eq!(rx.try_recv().unwrap(), CatalogChange::Appended(appended_id));
        assert_eq!(rx.try_recv().unwrap(), CatalogChange::Loaded(2));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_observer_sees_post_submit_state() {
        let catalog = EventCatalog::with_events(vec![event("A", Category::Sports)]);
        let mut rx = catalog.subscribe();
        catalog.submit(event("X", Category::Charity));

        assert!(rx.try_recv().is_ok());
        assert_eq!(names(&catalog.all()), vec!["X", "A"]);
    }

    #[test]
    fn test_concurrent_readers_see_whole_submits() {
        let catalog = Arc::new(EventCatalog::with_events(vec![
            event("A", Category::Sports),
            event("B", Category::Sports),
        ]));
        let posted = event("Posted", Category::Charity);
        let posted_id = posted.id;
        let start = Arc::new(Barrier::new(5));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                let start = Arc::clone(&start);
                thread::spawn(move || {
                    start.wait();
                    for _ in 0..2_000 {
                        let snapshot = catalog.all();
                        match snapshot.len() {
                            2 => assert_eq!(names(&snapshot), vec!["A", "B"]),
                            3 => {
                                assert_eq!(snapshot[0].id, posted_id);
                                assert_eq!(names(&snapshot[1..]), vec!["A", "B"]);
                            }
                            n => panic!("snapshot with {n} events"),
                        }
                    }
                })
            })
            .collect();

        start.wait();
        catalog.submit(posted);

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_hydrate_appends_in_store_order() {
        let store = MemoryStore::with_events(vec![
            event("One", Category::Sports),
            event("Two", Category::Markets),
        ]);
        let catalog = EventCatalog::with_events(vec![event("Existing", Category::Comedy)]);

        let count = catalog.hydrate(&store).unwrap();
        assert_eq!(count, 2);
        assert_eq!(names(&catalog.all()), vec!["Existing", "One", "Two"]);
    }

    #[test]
    fn test_failed_hydrate_leaves_catalog_untouched() {
        let catalog = EventCatalog::with_events(vec![event("Existing", Category::Comedy)]);
        let err = catalog.hydrate(&FailingStore).unwrap_err();

        assert!(matches!(err, CityBuzzError::LoadFailure(_)));
        assert!(err.is_retryable());
        assert_eq!(names(&catalog.all()), vec!["Existing"]);
    }

    #[test]
    fn test_submit_and_persist_writes_through() {
        let store = MemoryStore::default();
        let catalog = EventCatalog::new();
        let e = event("Posted", Category::Workshops);
        catalog.submit_and_persist(e.clone(), &store);

        assert_eq!(catalog.get(&e.id).map(|e| e.name), Some("Posted".into()));
        assert_eq!(store.load_all().unwrap(), vec![e]);
    }

    #[test]
    fn test_submit_survives_persist_failure() {
        let catalog = EventCatalog::new();
        catalog.submit_and_persist(event("Posted", Category::Workshops), &FailingStore);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_seed_submit_filter_scenario() {
        let catalog = EventCatalog::new();
        for (name, category) in [
            ("Food Truck Rally", Category::FoodAndDrinks),
            ("K-Wings vs Toledo Walleye", Category::Sports),
            ("Winter Art Hop", Category::ArtsAndCulture),
            ("Open Mic Comedy Night", Category::Comedy),
        ] {
            catalog.append(event(name, category));
        }
        catalog.submit(event("Community Food Drive", Category::Charity));

        let categories: HashSet<Category> = [Category::Sports, Category::Charity].into();
        let result = filter(&catalog.all(), "", &categories);

        assert_eq!(
            names(&result),
            vec!["Community Food Drive", "K-Wings vs Toledo Walleye"]
        );
    }
}
