use anyhow::Result;
use chrono::Datelike;
use citybuzz_core::constants::FEATURED_COUNT;
use citybuzz_core::query::{self, Direction};
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::{Render, render_list};

pub fn run(ctx: &AppContext, current: bool, sorted: bool) -> Result<()> {
    let now = super::now();
    let all = ctx.catalog.all();

    let mut events = if current {
        query::current(&all, now)
    } else {
        all
    };

    if sorted {
        query::sort_by_date(&mut events, now.year(), Direction::Ascending);
    }

    let featured = query::featured(&events, FEATURED_COUNT);
    if !featured.is_empty() {
        println!("{}", "Featured".bold());
        for event in featured {
            println!("{}", event.render());
        }
        println!();
    }

    println!("{}", "All events".bold());
    render_list(&events);
    Ok(())
}
