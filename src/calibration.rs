use std::time::Duration;

/// Tunable constants for matching, scoring and input handling.
///
/// The engine reads [`CALIBRATION`] unless a caller passes its own copy to one
/// of the `*_with` entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Characters of surrounding text kept on each side of a match.
    pub context_radius_chars: usize,
    /// Density is expressed as weighted matches per this many words.
    pub density_words_basis: f64,
    /// Multiplier from density to raw score. 5.0 saturates at 20 per 100 words.
    pub density_multiplier: f64,
    pub score_min: u32,
    pub score_max: u32,
    pub band_mostly_human_min: u32,
    pub band_some_ai_min: u32,
    pub band_likely_ai_min: u32,
    pub band_very_ai_min: u32,
    /// How long the CLI waits on a non-terminal stdin before giving up.
    pub stdin_wait: Duration,
}

pub static CALIBRATION: Calibration = Calibration {
    context_radius_chars: 40,
    density_words_basis: 100.0,
    density_multiplier: 5.0,
    score_min: 0,
    score_max: 100,
    band_mostly_human_min: 11,
    band_some_ai_min: 26,
    band_likely_ai_min: 51,
    band_very_ai_min: 76,
    stdin_wait: Duration::from_millis(1000),
};

impl Default for Calibration {
    fn default() -> Self {
        CALIBRATION
    }
}
