use std::fmt;

use serde::Serialize;

use crate::calibration::{Calibration, CALIBRATION};
use crate::matcher::AnalysisResult;

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "Very Human")]
    VeryHuman,
    #[serde(rename = "Mostly Human")]
    MostlyHuman,
    #[serde(rename = "Some AI Patterns")]
    SomeAiPatterns,
    #[serde(rename = "Likely AI")]
    LikelyAi,
    #[serde(rename = "Very AI-like")]
    VeryAiLike,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::VeryHuman => "Very Human",
            Label::MostlyHuman => "Mostly Human",
            Label::SomeAiPatterns => "Some AI Patterns",
            Label::LikelyAi => "Likely AI",
            Label::VeryAiLike => "Very AI-like",
        }
    }

    pub fn for_score(score: u32) -> Self {
        Self::for_score_with(score, &CALIBRATION)
    }

    pub fn for_score_with(score: u32, calibration: &Calibration) -> Self {
        if score >= calibration.band_very_ai_min {
            Label::VeryAiLike
        } else if score >= calibration.band_likely_ai_min {
            Label::LikelyAi
        } else if score >= calibration.band_some_ai_min {
            Label::SomeAiPatterns
        } else if score >= calibration.band_mostly_human_min {
            Label::MostlyHuman
        } else {
            Label::VeryHuman
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    pub score: u32,
    pub label: Label,
}

/// Weighted matches per `density_words_basis` words. Zero for empty text.
pub fn weighted_density(result: &AnalysisResult, calibration: &Calibration) -> f64 {
    if result.word_count == 0 {
        return 0.0;
    }
    result.total_weighted_count as f64 / result.word_count as f64 * calibration.density_words_basis
}

pub fn score(result: &AnalysisResult) -> ScoredResult {
    score_with(result, &CALIBRATION)
}

pub fn score_with(result: &AnalysisResult, calibration: &Calibration) -> ScoredResult {
    let raw = weighted_density(result, calibration) * calibration.density_multiplier;
    let bounded = raw.clamp(
        f64::from(calibration.score_min),
        f64::from(calibration.score_max),
    );
    let score = bounded.round() as u32;
    ScoredResult {
        score,
        label: Label::for_score_with(score, calibration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(word_count: usize, total_weighted_count: u64) -> AnalysisResult {
        AnalysisResult {
            word_count,
            categories: Vec::new(),
            all_matches: Vec::new(),
            total_weighted_count,
        }
    }

    #[test]
    fn label_cut_points_are_exact() {
        let cases = [
            (0, Label::VeryHuman),
            (10, Label::VeryHuman),
            (11, Label::MostlyHuman),
            (25, Label::MostlyHuman),
            (26, Label::SomeAiPatterns),
            (50, Label::SomeAiPatterns),
            (51, Label::LikelyAi),
            (75, Label::LikelyAi),
            (76, Label::VeryAiLike),
            (100, Label::VeryAiLike),
        ];
        for (score, expected) in cases {
            assert_eq!(Label::for_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn zero_words_scores_zero() {
        let scored = score(&result(0, 0));
        assert_eq!(scored.score, 0);
        assert_eq!(scored.label, Label::VeryHuman);
    }

    #[test]
    fn density_times_five_then_rounded() {
        // 1 weighted match in 100 words: density 1.0, raw 5.0
        assert_eq!(score(&result(100, 1)).score, 5);
        // 1 in 30 words: density 3.33, raw 16.67
        assert_eq!(score(&result(30, 1)).score, 17);
        // 1 in 7 words: density 14.29, raw 71.43
        assert_eq!(score(&result(7, 1)).score, 71);
    }

    #[test]
    fn saturates_at_one_hundred() {
        assert_eq!(score(&result(100, 20)).score, 100);
        let scored = score(&result(5, 40));
        assert_eq!(scored.score, 100);
        assert_eq!(scored.label, Label::VeryAiLike);
    }

    #[test]
    fn custom_multiplier() {
        let calibration = Calibration {
            density_multiplier: 1.0,
            ..CALIBRATION
        };
        assert_eq!(score_with(&result(100, 20), &calibration).score, 20);
    }

    #[test]
    fn label_serializes_as_display_text() {
        let json = serde_json::to_string(&Label::SomeAiPatterns).unwrap();
        assert_eq!(json, "\"Some AI Patterns\"");
        assert_eq!(Label::VeryAiLike.to_string(), "Very AI-like");
    }
}
