use anyhow::Result;
use citybuzz_core::feed::SimulatedFeed;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::render_list;

pub async fn run(ctx: &AppContext, page: usize) -> Result<()> {
    let feed = SimulatedFeed::new(ctx.config.feed_delay(), ctx.config.feed_timeout());

    println!("{}", format!("Loading page {}...", page).dimmed());

    match feed.load_page(page).await {
        Ok(events) if events.is_empty() => {
            println!("{}", "No more events".dimmed());
            Ok(())
        }
        Ok(events) => {
            render_list(&events);
            let count = ctx.catalog.extend(events);
            println!("\n{} {} events", "Added".green(), count);
            Ok(())
        }
        Err(e) if e.is_retryable() => {
            anyhow::bail!("{}\n\nRun `citybuzz refresh --page {}` to retry.", e, page)
        }
        Err(e) => Err(e.into()),
    }
}
