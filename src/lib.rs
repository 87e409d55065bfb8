//! Heuristic scoring of prose for phrasing patterns common in machine-generated text.
//!
//! A fixed [`Catalog`] of weighted regex categories is scanned against the input,
//! the weighted match density is mapped onto a 0-100 score, and the score is
//! banded into a [`Label`]. This is a pattern catalog, not a classifier.
//!
//! ```
//! let analysis = prose_tells::analyze("Great question! I would be happy to help you.");
//! assert!(analysis.result.category("sycophantic").is_some());
//! ```

pub mod calibration;
pub mod catalog;
pub mod error;
pub mod input;
pub mod matcher;
pub mod report;
pub mod scorer;

pub use calibration::{Calibration, CALIBRATION};
pub use catalog::{Catalog, PatternCategory, PatternRule};
pub use error::{CatalogError, InputError};
pub use matcher::{scan, scan_with, AnalysisResult, CategoryResult, Match, TaggedMatch};
pub use scorer::{score, score_with, Label, ScoredResult};

/// Scan result together with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub scored: ScoredResult,
}

/// Scan and score `text` with the built-in catalog.
pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, Catalog::builtin())
}

pub fn analyze_with(text: &str, catalog: &Catalog) -> Analysis {
    let result = scan(text, catalog);
    let scored = score(&result);
    Analysis { result, scored }
}
