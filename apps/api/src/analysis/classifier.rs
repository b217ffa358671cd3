//! Reclassifies the model's free-text reply into the section taxonomy.
//!
//! Single pass with sticky state: lines accumulate under the current
//! category until a line mentions another category, which both switches the
//! state and claims the triggering line for the new category.

use std::collections::BTreeMap;

use crate::extraction::keywords::classifier_keywords;
use crate::models::resume::Category;

/// Buckets a reply's lines by category. Never loses content: if the pass
/// cannot account for every non-blank line, the whole reply is returned
/// under `overall` instead.
pub fn structure_reply(text: &str) -> BTreeMap<Category, String> {
    let mut sections: BTreeMap<Category, String> = BTreeMap::new();
    let mut current = Category::Overall;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(category) = match_category(line) {
            current = category;
        }
        let bucket = sections.entry(current).or_default();
        bucket.push_str(line);
        bucket.push('\n');
    }

    for bucket in sections.values_mut() {
        *bucket = bucket.trim_end().to_string();
    }
    sections.retain(|_, bucket| !bucket.is_empty());

    let kept: usize = sections
        .values()
        .map(|b| b.lines().map(|l| l.trim().len()).sum::<usize>())
        .sum();
    let expected: usize = text.lines().map(|l| l.trim().len()).sum();
    if kept != expected {
        // Degraded path: one catch-all bucket rather than dropped text.
        let mut fallback = BTreeMap::new();
        let whole = text.trim();
        if !whole.is_empty() {
            fallback.insert(Category::Overall, whole.to_string());
        }
        return fallback;
    }

    sections
}

/// First category (in the fixed enum order) whose display label or keyword
/// set matches the line. Ties resolve deterministically to the earlier
/// category.
fn match_category(line: &str) -> Option<Category> {
    Category::ALL.into_iter().find(|category| {
        line.contains(category.label())
            || classifier_keywords(*category)
                .iter()
                .any(|k| line.contains(k))
    })
}
