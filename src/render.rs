//! Terminal rendering for City Buzz types.

use chrono::{Datelike, Local};
use citybuzz_core::category::Category;
use citybuzz_core::event::Event;
use citybuzz_core::event_date::describe_event_date;
use owo_colors::{OwoColorize, Rgb};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let (r, g, b) = hex_rgb(self.style().color);
        self.label().color(Rgb(r, g, b)).to_string()
    }
}

/// One-line card: date, name, venue, category tag
impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{:>15}  {}  {}  [{}]",
            self.date,
            self.name.bold(),
            self.location.medium_display().dimmed(),
            self.category.render()
        )
    }
}

/// Multi-line detail view.
pub fn render_detail(event: &Event) -> Vec<String> {
    let year = Local::now().year();
    let when = event
        .starts_at(year)
        .map(describe_event_date)
        .unwrap_or_else(|| event.date.clone());

    let mut lines = vec![
        event.name.bold().to_string(),
        format!("  {} {}", "When:".dimmed(), when),
        format!("  {} {}", "Where:".dimmed(), event.location.medium_display()),
        format!("  {} {}", "Address:".dimmed(), event.location.full_address),
        format!("  {} {}", "City:".dimmed(), event.location.city),
    ];

    let coordinate = event.location.coordinate;
    if !coordinate.is_unknown() {
        lines.push(format!(
            "  {} {:.4}, {:.4}",
            "Map:".dimmed(),
            coordinate.latitude,
            coordinate.longitude
        ));
    }

    lines.push(format!(
        "  {} {} ({})",
        "Category:".dimmed(),
        event.category.render(),
        event.category.style().icon
    ));

    if let Some(description) = &event.description {
        lines.push(String::new());
        lines.push(format!("  {}", description));
    }

    lines.push(format!("  {}", event.id.to_string().dimmed()));
    lines
}

pub fn render_list(events: &[Event]) {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }
    for event in events {
        println!("{}", event.render());
    }
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    (channel(0), channel(2), channel(4))
}
