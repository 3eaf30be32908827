mod commands;
mod context;
mod render;

use anyhow::Result;
use citybuzz_core::config::CityBuzzConfig;
use citybuzz_core::logging::{LoggingDestination, init_logging};
use clap::{Parser, Subcommand};

use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "citybuzz")]
#[command(about = "Browse, search, and post local community events")]
struct Cli {
    /// Work on an in-memory copy of the sample events; nothing is saved
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every event, newest submissions first
    List {
        /// Only events happening today or later
        #[arg(long)]
        current: bool,

        /// Sort chronologically instead of catalog order
        #[arg(long)]
        sorted: bool,
    },
    /// Search by name, venue, or area, optionally narrowed by category
    Search {
        /// Text to look for (case-insensitive)
        query: Option<String>,

        /// Category label, e.g. "Food & Drinks" or "sports" (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Remember the given categories for future searches
        #[arg(long)]
        remember: bool,

        /// Forget remembered categories
        #[arg(long, conflicts_with = "remember")]
        clear: bool,
    },
    /// Events on a given day: "today", "tomorrow", or M/D
    Day {
        #[arg(default_value = "today")]
        day: String,
    },
    /// Show one event in detail
    Show {
        /// Event id
        id: String,
    },
    /// Post a new event
    Post {
        /// Event name
        name: String,

        /// When, e.g. "2/20 @ 11 AM" or "2026-02-20 11:00"
        #[arg(short, long)]
        date: String,

        /// Venue name
        #[arg(long)]
        venue: String,

        /// Neighborhood or area
        #[arg(long)]
        area: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Category label (defaults to "Food & Drinks")
        #[arg(short, long)]
        category: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,
    },
    /// List the category palette
    Categories,
    /// Load a page from the remote feed and add it to the catalog
    Refresh {
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CityBuzzConfig::load()?;

    let destination = if cli.ephemeral {
        LoggingDestination::StderrOnly
    } else {
        LoggingDestination::FileAndStderr(config.data_path())
    };
    init_logging(destination, Some(config.log_filter.as_deref().unwrap_or("warn")))?;

    let ctx = AppContext::load(config, cli.ephemeral)?;

    match cli.command {
        Commands::List { current, sorted } => commands::list::run(&ctx, current, sorted),
        Commands::Search {
            query,
            categories,
            remember,
            clear,
        } => {
            let categories = categories.iter().map(|c| commands::parse_category(c)).collect();
            commands::search::run(&ctx, query.unwrap_or_default(), categories, remember, clear)
        }
        Commands::Day { day } => commands::day::run(&ctx, &day),
        Commands::Show { id } => commands::show::run(&ctx, &id),
        Commands::Post {
            name,
            date,
            venue,
            area,
            address,
            category,
            description,
        } => commands::post::run(
            &ctx,
            commands::post::PostArgs {
                name,
                date,
                venue,
                area,
                address,
                category,
                description,
            },
        ),
        Commands::Categories => commands::categories::run(),
        Commands::Refresh { page } => commands::refresh::run(&ctx, page).await,
    }
}
