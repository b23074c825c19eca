//! SQL seed-script rendering and output.

use anyhow::Context;
use std::path::Path;

use crate::types::ClassifiedQuote;

/// Double every single quote for embedding in a SQL string literal.
fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

/// Render the full seed script for the selected quotes.
///
/// One multi-row `INSERT INTO public.quotes (content, author, category)`
/// statement framed by comment lines; rows are comma-terminated except the
/// last, which carries the statement terminator. Author text additionally
/// has comma characters stripped from both ends after escaping. Rendering is
/// deterministic: identical input yields byte-identical output.
pub fn render_script(total_loaded: usize, selected: &[ClassifiedQuote]) -> String {
    let mut script = String::new();
    script.push_str("-- Auto-generated quotes from CSV\n");
    script.push_str(&format!("-- Total quotes: {}\n\n", total_loaded));
    script.push_str(&format!("-- Inserting {} quotes\n\n", selected.len()));

    if !selected.is_empty() {
        script.push_str("INSERT INTO public.quotes (content, author, category) VALUES\n");
        for (i, record) in selected.iter().enumerate() {
            let content = escape(&record.quote.quote);
            let author = escape(&record.quote.author);
            let author = author.trim_matches(',');
            let terminator = if i + 1 < selected.len() { ',' } else { ';' };
            script.push_str(&format!(
                "  ('{}', '{}', '{}'){}\n",
                content,
                author,
                record.category.name(),
                terminator
            ));
        }
    }

    script.push_str("\n-- Quotes import complete\n");
    script
}

/// Write the script to the output path, truncating any existing file.
///
/// The containing directory must already exist; a missing or unwritable
/// destination is fatal.
pub fn write_script<P: AsRef<Path>>(path: P, script: &str) -> anyhow::Result<()> {
    std::fs::write(path.as_ref(), script)
        .with_context(|| format!("Failed to write SQL script: {}", path.as_ref().display()))
}
