use anyhow::{Context, Result, bail};
use citybuzz_core::event::EventId;

use crate::context::AppContext;
use crate::render::render_detail;

pub fn run(ctx: &AppContext, id: &str) -> Result<()> {
    let id: EventId = id
        .parse()
        .with_context(|| format!("'{}' is not a valid event id", id))?;

    let Some(event) = ctx.catalog.get(&id) else {
        bail!("No event with id {}", id);
    };

    for line in render_detail(&event) {
        println!("{}", line);
    }
    Ok(())
}
