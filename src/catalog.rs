//! The pattern catalog: named, weighted groups of regex rules.
//!
//! The built-in table is compiled once into [`Catalog::builtin`]. Callers that
//! want a different taxonomy assemble their own with [`Catalog::new`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Matches, Regex, RegexBuilder};

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Rules and categories
// ---------------------------------------------------------------------------

/// One compiled pattern. Case-insensitive unless built as case-sensitive.
#[derive(Debug, Clone)]
pub struct PatternRule {
    source: String,
    case_sensitive: bool,
    regex: Regex,
}

impl PatternRule {
    pub fn new(source: impl Into<String>, case_sensitive: bool) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(Self {
            source,
            case_sensitive,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Leftmost, non-overlapping matches in document order.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.regex.find_iter(text)
    }
}

#[derive(Debug, Clone)]
pub struct PatternCategory {
    pub key: String,
    pub name: String,
    pub description: String,
    pub weight: u32,
    pub rules: Vec<PatternRule>,
}

impl PatternCategory {
    /// Compile a category from `(pattern, case_sensitive)` pairs.
    pub fn compile<I, S>(
        key: &str,
        name: &str,
        description: &str,
        weight: u32,
        patterns: I,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let rules = patterns
            .into_iter()
            .map(|(pattern, case_sensitive)| {
                let pattern = pattern.into();
                PatternRule::new(pattern.clone(), case_sensitive).map_err(|source| {
                    CatalogError::InvalidPattern {
                        key: key.to_string(),
                        pattern,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            weight,
            rules,
        })
    }

    fn from_def(def: &CategoryDef) -> Result<Self, CatalogError> {
        Self::compile(
            def.key,
            def.name,
            def.description,
            def.weight,
            def.rules.iter().map(|r| (r.pattern, r.case_sensitive)),
        )
    }
}

/// Ordered, validated set of categories. Iteration order is declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<PatternCategory>,
}

impl Catalog {
    /// Validate and wrap `categories`. Keys must be unique and non-empty and
    /// every weight must be at least 1.
    pub fn new(categories: Vec<PatternCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if !seen.insert(category.key.as_str()) {
                return Err(CatalogError::DuplicateKey(category.key.clone()));
            }
            if category.weight == 0 {
                return Err(CatalogError::ZeroWeight(category.key.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternCategory> {
        self.categories.iter()
    }

    pub fn get(&self, key: &str) -> Option<&PatternCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PatternCategory;
    type IntoIter = std::slice::Iter<'a, PatternCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

struct RuleDef {
    pattern: &'static str,
    case_sensitive: bool,
}

struct CategoryDef {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    weight: u32,
    rules: &'static [RuleDef],
}

const fn ci(pattern: &'static str) -> RuleDef {
    RuleDef {
        pattern,
        case_sensitive: false,
    }
}

// Capitalized sentence openers; lowercase mid-sentence uses are fine.
const fn cs(pattern: &'static str) -> RuleDef {
    RuleDef {
        pattern,
        case_sensitive: true,
    }
}

static BUILTIN_TABLE: &[CategoryDef] = &[
    CategoryDef {
        key: "significance",
        name: "Inflated Significance",
        description: "Frames ordinary subjects as historic or symbolically weighty",
        weight: 3,
        rules: &[
            ci(r"\b(?:stands|serves) as an? (?:testament|reminder|symbol)\b"),
            ci(r"\btestament to\b"),
            ci(r"\bplays? an? (?:vital|crucial|pivotal|key|significant) role\b"),
            ci(
                r"\b(?:marks?|marking|represents?) an? (?:pivotal|significant|major) (?:moment|milestone|shift|turning point)\b",
            ),
            ci(r"\benduring legacy\b"),
            ci(r"\bunderscor(?:es|ing) (?:the|its) (?:importance|significance)\b"),
            ci(r"\bleaves? an? (?:lasting|indelible) (?:mark|impact)\b"),
            ci(r"\bin the ever-(?:evolving|changing) (?:landscape|world)\b"),
        ],
    },
    CategoryDef {
        key: "promotional",
        name: "Promotional Language",
        description: "Advertising register where neutral description is expected",
        weight: 2,
        rules: &[
            ci(r"\bgroundbreaking\b"),
            ci(r"\bcommitment to (?:excellence|quality|innovation)\b"),
            ci(r"\b(?:rich|vibrant) (?:cultural )?(?:heritage|history|tapestry)\b"),
            ci(r"\bnestled (?:in|within|among)\b"),
            ci(r"\bin the heart of\b"),
            ci(r"\b(?:breathtaking|stunning|awe-inspiring)\b"),
            ci(r"\b(?:world-class|state-of-the-art|cutting-edge|best-in-class)\b"),
            ci(r"\bmust-(?:visit|see|have)\b"),
            ci(r"\bseamless(?:ly)?\b"),
            ci(r"\bboasts an?\b"),
            ci(r"\bunparalleled\b"),
        ],
    },
    CategoryDef {
        key: "ai_vocabulary",
        name: "AI Vocabulary",
        description: "Words that appear far more often in model output than in human prose",
        weight: 1,
        rules: &[
            ci(
                r"\b(?:delve[sd]?|delving|foster(?:s|ed|ing)?|underscore[sd]?|underscoring|showcas(?:e|es|ed|ing)|bolster(?:s|ed|ing)?|garner(?:s|ed|ing)?|leverag(?:e|es|ed|ing))\b",
            ),
            ci(
                r"\b(?:tapestry|testament|landscape|realm|interplay|intricacies|paradigm|synergy)\b",
            ),
            ci(
                r"\b(?:pivotal|crucial|intricate|multifaceted|meticulous(?:ly)?|nuanced|holistic|transformative)\b",
            ),
            ci(r"\b(?:moreover|furthermore|additionally|notably)\b"),
        ],
    },
    CategoryDef {
        key: "sycophantic",
        name: "Sycophantic Tone",
        description: "Flattery and eager-to-please filler aimed at the reader",
        weight: 3,
        rules: &[
            ci(r"\b(?:great|excellent|good|fantastic|wonderful) question\b"),
            ci(r"\b(?:happy|glad|delighted) to help\b"),
            ci(r"\byou'?re (?:absolutely|totally|completely) right\b"),
            ci(r"\bwhat an? (?:great|wonderful|fantastic|thoughtful) (?:idea|question|point)\b"),
            ci(r"\bthat'?s an? (?:great|excellent|fantastic) (?:point|observation|idea)\b"),
            cs(r"\b(?:Certainly|Absolutely)!"),
        ],
    },
    CategoryDef {
        key: "chatbot",
        name: "Chatbot Artifacts",
        description: "Conversational sign-offs and offers left over from a chat session",
        weight: 4,
        rules: &[
            ci(r"\bI hope this helps\b"),
            ci(r"\blet me know if\b"),
            ci(r"\bwould you like me to\b"),
            ci(r"\bfeel free to\b"),
            ci(r"\bdon'?t hesitate to\b"),
            ci(r"\bhere(?:'s| is) an? (?:brief |quick )?(?:overview|summary|breakdown)\b"),
        ],
    },
    CategoryDef {
        key: "ai_disclosure",
        name: "AI Self-Reference",
        description: "The text refers to itself as a model or to its training cutoff",
        weight: 5,
        rules: &[
            ci(r"\bas an AI\b"),
            ci(r"\bas a (?:large )?language model\b"),
            ci(r"\bas of my (?:last |latest )?(?:knowledge )?(?:update|cutoff|training)\b"),
            ci(r"\bI (?:don'?t|do not) have (?:access to )?(?:real-time|personal|browsing)\b"),
            ci(r"\bup to my last training\b"),
            ci(r"\bI cannot browse\b"),
        ],
    },
    CategoryDef {
        key: "editorializing",
        name: "Editorializing",
        description: "Announces that something matters instead of showing it",
        weight: 2,
        rules: &[
            ci(
                r"\bit(?:'s| is) (?:important|worth|crucial) (?:to note|noting|mentioning|to remember)\b",
            ),
            ci(r"\bit should be noted\b"),
            ci(r"\bno discussion (?:of .{1,40}? )?would be complete\b"),
            ci(r"\bneedless to say\b"),
            ci(r"\bit goes without saying\b"),
        ],
    },
    CategoryDef {
        key: "superficial_analysis",
        name: "Superficial Analysis",
        description: "Trailing participle clauses that assert meaning without support",
        weight: 2,
        rules: &[
            ci(
                r",\s+(?:highlighting|underscoring|emphasizing|reflecting|showcasing|symbolizing|illustrating)\b",
            ),
            ci(r",\s+(?:contributing to|ensuring|fostering|paving the way for)\b"),
            ci(r"\b(?:reflecting|highlighting) (?:the|its|their) (?:broader|deeper|ongoing)\b"),
        ],
    },
    CategoryDef {
        key: "negative_parallelism",
        name: "Negative Parallelism",
        description: "Not-only-but-also and it's-not-X-it's-Y constructions",
        weight: 2,
        rules: &[
            ci(r"\bnot (?:just|only|merely) .{1,40}?, but (?:also )?"),
            ci(r"\bit(?:'s| is) not (?:just )?about .{1,40}?[,;] it(?:'s| is)\b"),
            ci(r"\bno .{1,20}?, no .{1,20}?, just\b"),
        ],
    },
    CategoryDef {
        key: "rule_of_three",
        name: "Rule of Three",
        description: "Reflexive three-item lists",
        weight: 1,
        rules: &[ci(r"\b\w+, \w+, and \w+\b")],
    },
    CategoryDef {
        key: "vague_attribution",
        name: "Vague Attributions",
        description: "Claims credited to unnamed experts, studies, or observers",
        weight: 2,
        rules: &[
            ci(
                r"\b(?:experts|observers|critics|scholars) (?:say|argue|believe|suggest|note|have noted)\b",
            ),
            ci(r"\bstudies (?:show|suggest|have shown)\b"),
            ci(r"\b(?:many|some) (?:believe|argue)\b"),
            ci(r"\bit is widely (?:believed|accepted|recognized)\b"),
            ci(r"\bindustry reports\b"),
            ci(r"\bresearch suggests\b"),
        ],
    },
    CategoryDef {
        key: "challenges",
        name: "Challenges and Prospects",
        description: "Formulaic despite-its-challenges and future-outlook passages",
        weight: 2,
        rules: &[
            ci(r"\bdespite (?:its|these|the|their|such) challenges\b"),
            ci(r"\bfaces? (?:several|many|numerous|significant) challenges\b"),
            ci(r"\bfuture (?:prospects|outlook)\b"),
            ci(r"\bcontinues? to (?:thrive|evolve|flourish)\b"),
            ci(r"\bremains? to be seen\b"),
            ci(r"\bpoised to\b"),
        ],
    },
    CategoryDef {
        key: "summary",
        name: "Formulaic Summaries",
        description: "Closing paragraphs that restate what was just said",
        weight: 2,
        rules: &[
            cs(r"\bIn (?:conclusion|summary),"),
            cs(r"\bOverall,"),
            cs(r"\bTo sum up,"),
            cs(r"\bUltimately,"),
            ci(r"\bthe key takeaway\b"),
        ],
    },
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let categories = BUILTIN_TABLE
        .iter()
        .map(PatternCategory::from_def)
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in pattern table compiles");
    Catalog::new(categories).expect("built-in pattern table is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_thirteen_unique_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 13);
        let keys: HashSet<_> = catalog.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), 13);
        assert!(catalog.iter().all(|c| c.weight >= 1 && !c.rules.is_empty()));
    }

    #[test]
    fn builtin_order_is_declaration_order() {
        let keys: Vec<_> = Catalog::builtin().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.first(), Some(&"significance"));
        assert_eq!(keys.last(), Some(&"summary"));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let a = PatternCategory::compile("dup", "A", "a", 1, [("foo", false)]).unwrap();
        let b = PatternCategory::compile("dup", "B", "b", 2, [("bar", false)]).unwrap();
        let err = Catalog::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey(k) if k == "dup"));
    }

    #[test]
    fn rejects_zero_weight_and_empty_key() {
        let zero = PatternCategory::compile("z", "Z", "z", 0, [("foo", false)]).unwrap();
        assert!(matches!(Catalog::new(vec![zero]), Err(CatalogError::ZeroWeight(_))));

        let blank = PatternCategory::compile("", "Blank", "b", 1, [("foo", false)]).unwrap();
        assert!(matches!(Catalog::new(vec![blank]), Err(CatalogError::EmptyKey)));
    }

    #[test]
    fn invalid_pattern_names_its_category() {
        let compiled = PatternCategory::compile("broken", "Broken", "", 1, [("(unclosed", false)]);
        match compiled.unwrap_err() {
            CatalogError::InvalidPattern { key, pattern, .. } => {
                assert_eq!(key, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn case_sensitivity_is_per_rule() {
        let loose = PatternRule::new(r"\boverall,", false).unwrap();
        let strict = PatternRule::new(r"\bOverall,", true).unwrap();
        assert_eq!(loose.find_iter("OVERALL, fine").count(), 1);
        assert_eq!(strict.find_iter("overall, fine").count(), 0);
        assert_eq!(strict.find_iter("Overall, fine").count(), 1);
        assert!(strict.is_case_sensitive());
    }

    #[test]
    fn summary_openers_ignore_lowercase_usage() {
        let summary = Catalog::builtin().get("summary").unwrap();
        let hits: usize = summary
            .rules
            .iter()
            .map(|r| r.find_iter("the overall, ultimately, plan").count())
            .sum();
        assert_eq!(hits, 0);
    }
}
