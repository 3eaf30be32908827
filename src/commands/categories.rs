use anyhow::Result;
use citybuzz_core::category::Category;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run() -> Result<()> {
    for category in Category::ALL {
        let style = category.style();
        println!(
            "{:<28} {} {}",
            category.render(),
            style.icon.dimmed(),
            format!("#{}", style.color).dimmed()
        );
    }
    Ok(())
}
