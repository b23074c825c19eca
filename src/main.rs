//! QuoteVault seed-script generator.
//!
//! One-shot batch converter: reads the scraped quotes CSV, assigns each
//! quote a display category from its tags, caps each category, and writes
//! the SQL seed script for the `public.quotes` table.

mod classifier;
mod config;
mod emitter;
mod loader;
mod selector;
mod types;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::selector::CategoryPartitions;
use crate::types::{ClassifiedQuote, RawQuote};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotevault_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded");

    let quotes = loader::load_quotes(&config.source.path)?;
    let total_loaded = quotes.len();
    tracing::info!("Total quotes loaded: {}", total_loaded);

    let partitions = CategoryPartitions::from_records(classify_all(quotes));

    tracing::info!("Category distribution:");
    for (category, count) in partitions.counts() {
        tracing::info!("  {}: {} quotes", category.name(), count);
    }

    let selected = partitions.select(config.selection.per_category_cap);
    let script = emitter::render_script(total_loaded, &selected);
    emitter::write_script(&config.output.path, &script)?;

    tracing::info!("SQL file generated: {}", config.output.path);
    tracing::info!("Total quotes in SQL: {}", selected.len());

    Ok(())
}

/// Classify every record, preserving input order.
fn classify_all(quotes: Vec<RawQuote>) -> Vec<ClassifiedQuote> {
    quotes
        .into_iter()
        .map(|quote| {
            let category = classifier::classify(&quote.tags);
            ClassifiedQuote { quote, category }
        })
        .collect()
}
