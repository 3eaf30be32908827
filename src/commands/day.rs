use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use citybuzz_core::query::DateWindow;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::render_list;

pub fn run(ctx: &AppContext, day: &str) -> Result<()> {
    let now = super::now();
    let window = parse_window(day, now.year())?;

    let label = match window {
        DateWindow::Today => "Today".to_string(),
        DateWindow::Tomorrow => "Tomorrow".to_string(),
        DateWindow::On(date) => date.format("%a %b %-d").to_string(),
        DateWindow::Upcoming => "Upcoming".to_string(),
    };
    println!("{}", label.bold());

    render_list(&window.apply(&ctx.catalog.all(), now));
    Ok(())
}

/// "today", "tomorrow", "upcoming", or M/D in `year`
fn parse_window(input: &str, year: i32) -> Result<DateWindow> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(DateWindow::Today),
        "tomorrow" => Ok(DateWindow::Tomorrow),
        "upcoming" => Ok(DateWindow::Upcoming),
        other => match NaiveDate::parse_from_str(&format!("{year}/{other}"), "%Y/%m/%d") {
            Ok(date) => Ok(DateWindow::On(date)),
            Err(_) => bail!(
                "Invalid day '{}'. Expected \"today\", \"tomorrow\", \"upcoming\", or M/D",
                input
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("Today", 2026).unwrap(), DateWindow::Today);
        assert_eq!(parse_window("tomorrow", 2026).unwrap(), DateWindow::Tomorrow);
        assert_eq!(
            parse_window("2/17", 2026).unwrap(),
            DateWindow::On(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap())
        );
        assert!(parse_window("2/30", 2026).is_err());
        assert!(parse_window("someday", 2026).is_err());
    }
}
