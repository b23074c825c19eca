//! Tag-based quote categorization.

use crate::types::Category;

/// Parse the tags field's pseudo-list encoding.
///
/// The scrape dump writes tag lists with single-quote delimiters
/// (`['love', 'life']`); normalizing the quotes makes the text valid JSON.
/// Returns `None` for malformed or non-list input.
fn parse_tags(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(&raw.replace('\'', "\"")).ok()
}

/// Assign a category from the raw tags field.
///
/// Total for any input: unparseable tags or zero keyword hits fall back to
/// the default category instead of erroring.
pub fn classify(tags: &str) -> Category {
    let Some(parsed) = parse_tags(tags) else {
        return Category::default();
    };

    let tags_lower: Vec<String> = parsed.iter().map(|tag| tag.to_lowercase()).collect();

    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let score = category
            .keywords()
            .iter()
            .filter(|keyword| tags_lower.iter().any(|tag| tag.contains(**keyword)))
            .count();
        if score == 0 {
            continue;
        }
        // Only a strictly greater score displaces the current best, so ties
        // resolve to the category listed earlier in Category::ALL.
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((category, score)),
        }
    }

    best.map(|(category, _)| category).unwrap_or_default()
}
