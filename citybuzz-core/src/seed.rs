//! Bundled sample events, used to populate an empty store.

use crate::category::Category;
use crate::event::{Event, Location};

fn kalamazoo(name: &str, area: &str, address: &str, latitude: f64, longitude: f64) -> Location {
    Location::new(name, area, "Kalamazoo", address).at(latitude, longitude)
}

fn wings_event_center() -> Location {
    kalamazoo(
        "Wings Event Center",
        "Kalamazoo",
        "3600 Vanrick Dr, Kalamazoo, MI 49001",
        42.2547,
        -85.5494,
    )
}

fn bells_eccentric_cafe() -> Location {
    kalamazoo(
        "Bell's Eccentric Cafe",
        "Downtown",
        "355 E Kalamazoo Ave, Kalamazoo, MI 49007",
        42.2917,
        -85.5872,
    )
}

fn bronson_park() -> Location {
    kalamazoo(
        "Bronson Park",
        "Downtown",
        "200 S Rose St, Kalamazoo, MI 49007",
        42.2916,
        -85.5859,
    )
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            "Kalamazoo Wings vs Fort Wayne",
            "1/7 @ 7 PM",
            wings_event_center(),
            Category::Sports,
        ),
        Event::new(
            "Sunday Jazz Brunch",
            "1/8 @ 11 AM",
            kalamazoo(
                "Old Dog Tavern",
                "Downtown",
                "402 E Kalamazoo Ave, Kalamazoo, MI 49007",
                42.2917,
                -85.5833,
            ),
            Category::MusicAndConcerts,
        ),
        Event::new(
            "K-Wings vs Toledo Walleye",
            "2/13 @ 7 PM",
            wings_event_center(),
            Category::Sports,
        ),
        Event::new(
            "Open Mic Comedy Night",
            "2/13 @ 8 PM",
            kalamazoo(
                "Shakespeare's Pub",
                "Downtown",
                "241 E Kalamazoo Ave, Kalamazoo, MI 49007",
                42.2918,
                -85.5833,
            ),
            Category::Comedy,
        ),
        Event::new(
            "Winter Art Hop",
            "2/14 @ 5 PM",
            kalamazoo(
                "Kalamazoo Mall",
                "Downtown",
                "100 W Michigan Ave, Kalamazoo, MI 49007",
                42.2912,
                -85.5850,
            ),
            Category::ArtsAndCulture,
        ),
        Event::new(
            "Valentine's Day Jazz Night",
            "2/14 @ 7 PM",
            bells_eccentric_cafe(),
            Category::MusicAndConcerts,
        ),
        Event::new(
            "Winter Farmers Market",
            "2/17 @ 8 AM",
            kalamazoo(
                "Bank Street Market",
                "Downtown",
                "1157 Bank St, Kalamazoo, MI 49001",
                42.2896,
                -85.5851,
            ),
            Category::Markets,
        ),
        Event::new(
            "Late Night at The Union",
            "2/17 @ 10 PM",
            kalamazoo(
                "The Union",
                "Downtown",
                "125 S Kalamazoo Mall, Kalamazoo, MI 49007",
                42.2914,
                -85.5850,
            ),
            Category::Nightlife,
        ),
        Event::new("Community Food Drive", "2/20 @ 11 AM", bronson_park(), Category::Charity),
        Event::new(
            "Family Game Day",
            "2/20 @ 2 PM",
            kalamazoo(
                "Kalamazoo Public Library",
                "Central",
                "315 S Rose St, Kalamazoo, MI 49007",
                42.2908,
                -85.5859,
            ),
            Category::FamilyFun,
        ),
        Event::new(
            "DIY Workshop: Home Brewing",
            "2/21 @ 6 PM",
            bells_eccentric_cafe(),
            Category::Workshops,
        ),
        Event::new(
            "Anastasia - The Musical",
            "2/22 @ 7:30 PM",
            kalamazoo(
                "Miller Auditorium",
                "WMU Campus",
                "2200 Auditorium Dr, Kalamazoo, MI 49008",
                42.2828,
                -85.6147,
            ),
            Category::Theater,
        ),
        Event::new("Food Truck Rally", "2/23 @ 11 AM", bronson_park(), Category::FoodAndDrinks),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_samples_parse_and_have_unique_ids() {
        let events = sample_events();
        assert_eq!(events.len(), 13);
        assert!(events.iter().all(|e| e.starts_at(2026).is_some()));

        let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_samples_use_palette_categories() {
        let events = sample_events();
        assert!(events.iter().all(|e| e.category.is_known()));
        let distinct: HashSet<_> = events.iter().map(|e| e.category.clone()).collect();
        // Everything except Community
        assert_eq!(distinct.len(), 11);
    }
}
