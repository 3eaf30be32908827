use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDateTime};
use citybuzz_core::event_date::parse_event_date;
use citybuzz_core::submission::EventDraft;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::render_detail;

pub struct PostArgs {
    pub name: String,
    pub date: String,
    pub venue: String,
    pub area: String,
    pub address: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

pub fn run(ctx: &AppContext, args: PostArgs) -> Result<()> {
    let now = super::now();
    let starts_at = parse_datetime(&args.date, now.year())?;

    let mut draft = EventDraft::new(
        starts_at,
        ctx.config.default_city.clone(),
        ctx.config.default_coordinate(),
    );
    draft.name = args.name;
    draft.venue = args.venue;
    draft.area = args.area;
    draft.address = args.address;
    draft.description = args.description.unwrap_or_default();
    if let Some(label) = args.category {
        draft.category = super::parse_category(&label);
    }

    let event = draft.into_event()?;

    ctx.catalog.submit_and_persist(event.clone(), ctx.store.as_ref());

    println!("{}", "Event posted!".green().bold());
    for line in render_detail(&event) {
        println!("{}", line);
    }
    Ok(())
}

/// Accept the display format ("2/20 @ 11 AM") or "YYYY-MM-DD HH:MM".
fn parse_datetime(input: &str, year: i32) -> Result<NaiveDateTime> {
    parse_event_date(input, year)
        .or_else(|| NaiveDateTime::parse_from_str(input.trim(), "%Y-%m-%d %H:%M").ok())
        .ok_or_else(|| {
            anyhow!(
                "Invalid date '{}'. Expected e.g. \"2/20 @ 11 AM\" or \"2026-02-20 11:00\"",
                input
            )
        })
}
