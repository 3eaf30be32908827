use std::collections::HashSet;

use anyhow::Result;
use citybuzz_core::category::Category;
use citybuzz_core::preferences::CategoryPreferences;
use citybuzz_core::query;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::{Render, render_list};

pub fn run(
    ctx: &AppContext,
    text: String,
    categories: HashSet<Category>,
    remember: bool,
    clear: bool,
) -> Result<()> {
    let mut preferences = ctx.preferences();

    if clear {
        preferences.clear();
        ctx.save_preferences(&preferences)?;
    } else if remember {
        preferences = CategoryPreferences::new(categories.iter().cloned());
        ctx.save_preferences(&preferences)?;
    }

    // Explicit categories win over remembered ones
    let selected = if categories.is_empty() {
        preferences.categories()
    } else {
        categories
    };

    if !selected.is_empty() {
        let mut labels: Vec<_> = selected.iter().collect();
        labels.sort();
        let labels: Vec<String> = labels.into_iter().map(|c| c.render()).collect();
        println!("{} {}", "Categories:".dimmed(), labels.join(", "));
    }

    let events = query::filter(&ctx.catalog.all(), &text, &selected);
    render_list(&events);
    Ok(())
}
