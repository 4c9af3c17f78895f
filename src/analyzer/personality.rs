//! Personality axis scoring and characteristic labels.
//!
//! Each axis has two disjoint keyword pole sets.  The score is the share of
//! pole-B occurrences among all occurrences, scaled to `[0, 100]` and
//! truncated toward zero; zero total evidence means a neutral 50.

use crate::analyzer::keywords::{AnalyzerConfig, AxisKeywords};
use crate::analyzer::occurrences;
use crate::persona::PersonalityProfile;

/// Score all four axes and collect characteristic labels.
pub(crate) fn analyze(config: &AnalyzerConfig, text: &str) -> PersonalityProfile {
    PersonalityProfile {
        introvert_extrovert: axis_score(&config.introvert_extrovert, text),
        intuition_sensing: axis_score(&config.intuition_sensing, text),
        feeling_thinking: axis_score(&config.feeling_thinking, text),
        perceiving_judging: axis_score(&config.perceiving_judging, text),
        characteristics: characteristics(config, text),
    }
}

/// Position on one bipolar axis.
///
/// Occurrence counts are literal substring counts, not word-boundary-aware:
/// "partying" counts for "party".
fn axis_score(axis: &AxisKeywords, text: &str) -> u32 {
    let a = occurrences(text, &axis.pole_a);
    let b = occurrences(text, &axis.pole_b);
    let total = a + b;
    if total == 0 {
        return 50;
    }
    (b * 100 / total) as u32
}

/// Characteristic labels whose keyword counts strictly exceed their
/// thresholds.
fn characteristics(config: &AnalyzerConfig, text: &str) -> Vec<String> {
    config
        .characteristics
        .iter()
        .filter(|rule| occurrences(text, &rule.keywords) > rule.threshold)
        .map(|rule| rule.label.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_evidence_is_neutral() {
        let profile = analyze(&AnalyzerConfig::default(), "");
        assert_eq!(profile.introvert_extrovert, 50);
        assert_eq!(profile.intuition_sensing, 50);
        assert_eq!(profile.feeling_thinking, 50);
        assert_eq!(profile.perceiving_judging, 50);
    }

    #[test]
    fn test_pure_introvert_signal_scores_zero() {
        // "alone" is a pole-A (introvert) keyword, so the extrovert share is 0.
        let profile = analyze(&AnalyzerConfig::default(), "i like being alone");
        assert_eq!(profile.introvert_extrovert, 0);
    }

    #[test]
    fn test_mixed_signal_truncates_toward_zero() {
        // 3 extrovert hits out of 4 total: 3/4 * 100 = 75.
        let text = "party party party alone";
        let profile = analyze(&AnalyzerConfig::default(), text);
        assert_eq!(profile.introvert_extrovert, 75);

        // 1 of 3: 100/3 truncates to 33.
        let text = "party alone alone";
        let profile = analyze(&AnalyzerConfig::default(), text);
        assert_eq!(profile.introvert_extrovert, 33);
    }

    #[test]
    fn test_substring_counting_not_word_boundary() {
        // "plans" and "planning" both contain "plan".
        let text = "plans planning";
        let profile = analyze(&AnalyzerConfig::default(), text);
        assert_eq!(profile.perceiving_judging, 100);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let config = AnalyzerConfig::default();
        for text in ["", "logic", "feel feel feel", "practical facts idea theory future"] {
            let p = analyze(&config, text);
            for score in [
                p.introvert_extrovert,
                p.intuition_sensing,
                p.feeling_thinking,
                p.perceiving_judging,
            ] {
                assert!(score <= 100, "score {score} out of range for {text:?}");
            }
        }
    }

    #[test]
    fn test_characteristic_thresholds_are_strict() {
        let config = AnalyzerConfig::default();

        // Exactly 3 "data" occurrences does not clear the >3 threshold.
        let profile = analyze(&config, "data data data");
        assert!(profile.characteristics.is_empty());

        // A fourth occurrence does.
        let profile = analyze(&config, "data data data data");
        assert_eq!(profile.characteristics, vec!["Analytical".to_string()]);
    }

    #[test]
    fn test_exclamation_marks_count_toward_enthusiasm() {
        let config = AnalyzerConfig::default();
        let profile = analyze(&config, &"wow! ".repeat(11));
        assert!(profile.characteristics.contains(&"Enthusiastic".to_string()));
    }
}
