//! Motivation scoring: keyword frequency per category, clamped to 100.

use crate::analyzer::keywords::AnalyzerConfig;
use crate::analyzer::occurrences;
use crate::persona::MotivationProfile;

/// Score every motivation category as `min(10 * occurrences, 100)`.
pub(crate) fn analyze(config: &AnalyzerConfig, text: &str) -> MotivationProfile {
    let mut profile = MotivationProfile::default();
    for category in &config.motivations {
        let count = occurrences(text, &category.keywords) as u32;
        profile.push(category.name, (count * 10).min(100));
    }
    profile
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
