use crate::calibration::{Calibration, CALIBRATION};
use crate::catalog::{Catalog, PatternCategory};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// One occurrence of one rule in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub matched_text: String,
    /// Offset in characters, not bytes.
    pub position: usize,
    pub context: String,
    pub category_key: String,
}

/// A [`Match`] paired with the display name of its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMatch {
    pub category: String,
    pub item: Match,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult {
    pub key: String,
    pub name: String,
    pub description: String,
    pub weight: u32,
    pub matches: Vec<Match>,
}

impl CategoryResult {
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// `weight * count`, the category's share of the weighted total.
    pub fn impact(&self) -> u64 {
        u64::from(self.weight) * self.count() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub word_count: usize,
    /// Categories with at least one match, in catalog order.
    pub categories: Vec<CategoryResult>,
    pub all_matches: Vec<TaggedMatch>,
    pub total_weighted_count: u64,
}

impl AnalysisResult {
    pub fn category(&self, key: &str) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn total_matches(&self) -> usize {
        self.all_matches.len()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `radius` characters either side of `start..end`, with `...` on each side
/// that was clipped. Newlines are flattened so the snippet stays on one line.
fn context_around(text: &str, start: usize, end: usize, radius: usize) -> String {
    let ctx_start = match radius.checked_sub(1) {
        None => start,
        Some(n) => text[..start]
            .char_indices()
            .rev()
            .nth(n)
            .map_or(0, |(i, _)| i),
    };
    let ctx_end = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);

    let snippet = text[ctx_start..ctx_end].replace('\n', " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{snippet}{suffix}")
}

fn collect_category(
    text: &str,
    category: &PatternCategory,
    radius: usize,
) -> Option<CategoryResult> {
    let mut matches = Vec::new();

    // Rules are scanned independently; overlaps between rules all count.
    for rule in &category.rules {
        for m in rule.find_iter(text) {
            matches.push(Match {
                matched_text: m.as_str().to_string(),
                position: text[..m.start()].chars().count(),
                context: context_around(text, m.start(), m.end(), radius),
                category_key: category.key.clone(),
            });
        }
    }

    if matches.is_empty() {
        return None;
    }

    tracing::trace!(category = %category.key, count = matches.len(), "category matched");
    Some(CategoryResult {
        key: category.key.clone(),
        name: category.name.clone(),
        description: category.description.clone(),
        weight: category.weight,
        matches,
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Scan `text` against every rule in `catalog`.
pub fn scan(text: &str, catalog: &Catalog) -> AnalysisResult {
    scan_with(text, catalog, &CALIBRATION)
}

#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn scan_with(text: &str, catalog: &Catalog, calibration: &Calibration) -> AnalysisResult {
    let word_count = word_count(text);
    let radius = calibration.context_radius_chars;

    let categories: Vec<CategoryResult> = catalog
        .iter()
        .filter_map(|category| collect_category(text, category, radius))
        .collect();

    let all_matches: Vec<TaggedMatch> = categories
        .iter()
        .flat_map(|c| {
            c.matches.iter().map(move |m| TaggedMatch {
                category: c.name.clone(),
                item: m.clone(),
            })
        })
        .collect();

    let total_weighted_count: u64 = categories.iter().map(CategoryResult::impact).sum();

    tracing::debug!(
        word_count,
        categories = categories.len(),
        matches = all_matches.len(),
        total_weighted_count,
        "scan complete"
    );

    AnalysisResult {
        word_count,
        categories,
        all_matches,
        total_weighted_count,
    }
}
