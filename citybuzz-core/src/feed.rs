//! Simulated remote event feed.
//!
//! Stands in for a network backend: each page load waits for a fixed
//! delay, then returns a static page of events. The feed never touches
//! the catalog. Callers merge a loaded page with `EventCatalog::extend`,
//! and "Retry" is simply calling `load_page` again.

use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{info, warn};

use crate::category::Category;
use crate::constants::{FEED_DELAY, FEED_TIMEOUT};
use crate::error::{CityBuzzError, CityBuzzResult};
use crate::event::{Event, Location};

#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    delay: Duration,
    timeout: Duration,
    offline: bool,
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        SimulatedFeed::new(FEED_DELAY, FEED_TIMEOUT)
    }
}

impl SimulatedFeed {
    pub fn new(delay: Duration, timeout: Duration) -> Self {
        SimulatedFeed {
            delay,
            timeout,
            offline: false,
        }
    }

    /// A feed whose every load fails with a network error.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Load one page. Pages past the end are empty.
    ///
    /// Dropping the returned future abandons the load without side effects.
    pub async fn load_page(&self, page: usize) -> CityBuzzResult<Vec<Event>> {
        let result = timeout(self.timeout, self.fetch(page))
            .await
            .map_err(|_| CityBuzzError::LoadTimeout(self.timeout))
            .and_then(|r| r);

        match &result {
            Ok(events) => info!(page, count = events.len(), "Loaded feed page"),
            Err(e) => warn!(page, error = %e, "Feed load failed"),
        }
        result
    }

    async fn fetch(&self, page: usize) -> CityBuzzResult<Vec<Event>> {
        sleep(self.delay).await;

        if self.offline {
            return Err(CityBuzzError::LoadFailure("Network connection error".into()));
        }

        Ok(static_page(page))
    }
}

fn static_page(page: usize) -> Vec<Event> {
    let kalamazoo =
        |name: &str, area: &str, address: &str| Location::new(name, area, "Kalamazoo", address);

    match page {
        0 => vec![
            Event::new(
                "K-Wings Hockey",
                "1/22 @ 7 PM",
                kalamazoo(
                    "Wings Event Center",
                    "Portage",
                    "3600 Vanrick Dr, Kalamazoo, MI 49001",
                ),
                Category::Sports,
            )
            .with_image("hockey.stick"),
            Event::new(
                "Farmers Market",
                "1/23 @ 8 AM",
                kalamazoo(
                    "Bank Street Market",
                    "Edison",
                    "1157 Bank St, Kalamazoo, MI 49001",
                ),
                Category::Markets,
            )
            .with_image("leaf.fill"),
            Event::new(
                "WMU Basketball",
                "1/24 @ 7 PM",
                kalamazoo(
                    "University Arena",
                    "WMU Campus",
                    "Read Fieldhouse, Kalamazoo, MI 49008",
                ),
                Category::Other("College Events".into()),
            )
            .with_image("basketball.fill"),
            Event::new(
                "KIA Exhibition",
                "1/25 @ 11 AM",
                kalamazoo(
                    "Kalamazoo Institute of Arts",
                    "Downtown",
                    "314 S Park St, Kalamazoo, MI 49007",
                ),
                Category::ArtsAndCulture,
            )
            .with_image("photo.fill"),
        ],
        1 => vec![
            Event::new(
                "New Food Festival",
                "2/1 @ 2 PM",
                kalamazoo("City Center", "Downtown", ""),
                Category::FoodAndDrinks,
            )
            .with_image("fork.knife"),
            Event::new(
                "Rock Concert",
                "2/2 @ 8 PM",
                kalamazoo("Stadium", "Downtown", ""),
                Category::MusicAndConcerts,
            )
            .with_image("music.note"),
            Event::new(
                "Art Show",
                "2/3 @ 5 PM",
                kalamazoo("Art Gallery", "Downtown", ""),
                Category::ArtsAndCulture,
            )
            .with_image("paintpalette.fill"),
            Event::new(
                "Stand-up Night",
                "2/4 @ 9 PM",
                kalamazoo("Comedy Club", "Downtown", ""),
                Category::Comedy,
            )
            .with_image("theatermasks.fill"),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventCatalog;

    #[tokio::test(start_paused = true)]
    async fn test_load_page_waits_then_returns_events() {
        let feed = SimulatedFeed::default();
        let started = tokio::time::Instant::now();

        let events = feed.load_page(0).await.unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].name, "K-Wings Hockey");
        assert!(started.elapsed() >= FEED_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pages_past_the_end_are_empty() {
        let feed = SimulatedFeed::default();
        assert_eq!(feed.load_page(1).await.unwrap().len(), 4);
        assert!(feed.load_page(2).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_feed_times_out() {
        let feed = SimulatedFeed::new(Duration::from_secs(30), Duration::from_secs(5));
        let err = feed.load_page(0).await.unwrap_err();
        assert!(matches!(err, CityBuzzError::LoadTimeout(d) if d == Duration::from_secs(5)));
        assert!(err.is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_second_timeout_keeps_its_precision() {
        let feed = SimulatedFeed::new(Duration::from_secs(1), Duration::from_millis(250));
        let err = feed.load_page(0).await.unwrap_err();
        assert_eq!(err.to_string(), "Loading events timed out after 250ms");
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_feed_fails_and_catalog_is_untouched() {
        let catalog = EventCatalog::with_events(crate::seed::sample_events());
        let before = catalog.len();

        let result = SimulatedFeed::default().offline().load_page(0).await;
        assert!(matches!(result, Err(CityBuzzError::LoadFailure(_))));
        assert_eq!(catalog.len(), before);

        // Retry against a healthy feed and merge
        let page = SimulatedFeed::default().load_page(0).await.unwrap();
        catalog.extend(page);
        assert_eq!(catalog.len(), before + 4);
    }

    #[test]
    fn test_feed_keeps_unknown_category() {
        let page = static_page(0);
        let basketball = page.iter().find(|e| e.name == "WMU Basketball").unwrap();
        assert!(!basketball.category.is_known());
        assert_eq!(basketball.category.label(), "College Events");
    }
}
