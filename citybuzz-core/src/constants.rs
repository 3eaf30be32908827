//! Shared defaults.

use std::time::Duration;

/// City assigned to submitted events when the user doesn't pick one.
pub const DEFAULT_CITY: &str = "Kalamazoo";

/// Downtown Kalamazoo, used as the coordinate for submitted events.
pub const DEFAULT_LATITUDE: f64 = 42.2917;
pub const DEFAULT_LONGITUDE: f64 = -85.5872;

/// Simulated network latency of the remote feed.
pub const FEED_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound on a single feed load before it is reported as failed.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of events shown in the home screen's featured carousel.
pub const FEATURED_COUNT: usize = 3;
