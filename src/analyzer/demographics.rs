//! Demographic inference: four independent single-pass keyword lookups.

use crate::analyzer::keywords::{AnalyzerConfig, Indicator};
use crate::persona::Demographics;

/// Infer demographics from the combined lowercase text.
pub(crate) fn analyze(config: &AnalyzerConfig, text: &str) -> Demographics {
    Demographics {
        age_range: first_match(&config.age_indicators, text),
        occupation: first_match(&config.occupation_indicators, text),
        relationship_status: relationship_status(config, text),
        location: first_match(&config.location_indicators, text),
    }
}

/// Walk an ordered indicator table; the first keyword found as a substring
/// wins.  Later matches are never considered.
fn first_match(indicators: &[Indicator], text: &str) -> String {
    indicators
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, value)| (*value).to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Relationship status from three priority-ordered keyword groups: married
/// beats in-a-relationship beats single.  Any match within a group counts.
fn relationship_status(config: &AnalyzerConfig, text: &str) -> String {
    let any = |group: &[&str]| group.iter().any(|kw| text.contains(kw));
    if any(&config.married_indicators) {
        "Married".to_string()
    } else if any(&config.relationship_indicators) {
        "In Relationship".to_string()
    } else if any(&config.single_indicators) {
        "Single".to_string()
    } else {
        "Unknown".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
