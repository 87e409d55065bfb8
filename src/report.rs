//! Renderers for a finished [`Analysis`].
//!
//! - `detailed` - human-readable report with the most impactful categories first
//! - `summary` - one tab-separated line for scripts
//! - `json` - every match, pretty-printed

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::matcher::{CategoryResult, Match};
use crate::scorer::Label;
use crate::Analysis;

/// Examples shown per category in the detailed report.
const DETAILED_EXAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Detailed,
    Summary,
    Json,
}

pub fn render(analysis: &Analysis, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Detailed => Ok(detailed(analysis)),
        Format::Summary => Ok(summary(analysis)),
        Format::Json => json(analysis),
    }
}

// ---------------------------------------------------------------------------
// Detailed
// ---------------------------------------------------------------------------

/// Categories ordered by `weight * count`, ties kept in catalog order.
pub fn by_impact(analysis: &Analysis) -> Vec<&CategoryResult> {
    let mut ranked: Vec<&CategoryResult> = analysis.result.categories.iter().collect();
    ranked.sort_by(|a, b| b.impact().cmp(&a.impact()));
    ranked
}

pub fn detailed(analysis: &Analysis) -> String {
    let result = &analysis.result;
    let mut out = String::new();

    out.push_str("AI Writing Pattern Analysis\n");
    out.push_str("===========================\n");
    out.push_str(&format!(
        "Score: {}/100 ({})\n",
        analysis.scored.score, analysis.scored.label
    ));
    out.push_str(&format!(
        "Words: {}  Matches: {}\n",
        result.word_count,
        result.total_matches()
    ));

    if result.categories.is_empty() {
        out.push_str("\nNo AI writing patterns detected.\n");
        return out;
    }

    out.push_str("\nCategories (most impactful first):\n");
    for category in by_impact(analysis) {
        out.push_str(&format!(
            "\n  {} ({} {}, weight {})\n",
            category.name,
            category.count(),
            plural(category.count(), "match", "matches"),
            category.weight
        ));
        out.push_str(&format!("  {}\n", category.description));
        for m in category.matches.iter().take(DETAILED_EXAMPLES) {
            out.push_str(&format!("    - \"{}\": {}\n", m.matched_text, m.context));
        }
        if category.count() > DETAILED_EXAMPLES {
            out.push_str(&format!(
                "    ...and {} more\n",
                category.count() - DETAILED_EXAMPLES
            ));
        }
    }
    out
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

pub fn summary(analysis: &Analysis) -> String {
    format!(
        "{}\t{}\t{} words\t{} matches",
        analysis.scored.score,
        analysis.scored.label,
        analysis.result.word_count,
        analysis.result.total_matches()
    )
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    score: u32,
    label: Label,
    word_count: usize,
    total_matches: usize,
    total_weighted_count: u64,
    categories: JsonCategories<'a>,
}

/// Serialized as an object keyed by category key, in catalog order.
struct JsonCategories<'a>(&'a [CategoryResult]);

impl Serialize for JsonCategories<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in self.0 {
            map.serialize_entry(&category.key, &JsonCategory::from(category))?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct JsonCategory<'a> {
    name: &'a str,
    description: &'a str,
    weight: u32,
    count: usize,
    matches: Vec<JsonMatch<'a>>,
}

impl<'a> From<&'a CategoryResult> for JsonCategory<'a> {
    fn from(category: &'a CategoryResult) -> Self {
        Self {
            name: &category.name,
            description: &category.description,
            weight: category.weight,
            count: category.count(),
            matches: category.matches.iter().map(JsonMatch::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    text: &'a str,
    position: usize,
    context: &'a str,
}

impl<'a> From<&'a Match> for JsonMatch<'a> {
    fn from(m: &'a Match) -> Self {
        Self {
            text: &m.matched_text,
            position: m.position,
            context: &m.context,
        }
    }
}

pub fn json(analysis: &Analysis) -> serde_json::Result<String> {
    let report = JsonReport {
        score: analysis.scored.score,
        label: analysis.scored.label,
        word_count: analysis.result.word_count,
        total_matches: analysis.result.total_matches(),
        total_weighted_count: analysis.result.total_weighted_count,
        categories: JsonCategories(&analysis.result.categories),
    };
    serde_json::to_string_pretty(&report)
}
