//! Persona record types produced by the analyzer.
//!
//! A [`PersonaRecord`] is built once per run and never mutated afterwards;
//! the report renderer consumes it read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Comment, Post};

/// Number of fetched posts retained on the record for citations.
pub const SAMPLE_POSTS: usize = 5;

/// Number of fetched comments retained on the record for citations.
pub const SAMPLE_COMMENTS: usize = 10;

/// Inferred demographic attributes.
///
/// Each field is a single categorical pick, not a distribution.  Fields with
/// no keyword evidence hold the literal `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    /// Inferred age range, e.g. `"25-35"`.
    pub age_range: String,
    /// Inferred occupation, e.g. `"Software Developer"`.
    pub occupation: String,
    /// Inferred relationship status.
    pub relationship_status: String,
    /// Inferred location.
    pub location: String,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age_range: "Unknown".to_string(),
            occupation: "Unknown".to_string(),
            relationship_status: "Unknown".to_string(),
            location: "Unknown".to_string(),
        }
    }
}

/// Personality axis scores plus qualitative characteristic labels.
///
/// Each axis score is an integer in `[0, 100]`.  0 means the left pole
/// (introvert / intuition / feeling / perceiving), 100 the right pole
/// (extrovert / sensing / thinking / judging), 50 neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    /// 0 = introvert, 100 = extrovert.
    pub introvert_extrovert: u32,
    /// 0 = intuition, 100 = sensing.
    pub intuition_sensing: u32,
    /// 0 = feeling, 100 = thinking.
    pub feeling_thinking: u32,
    /// 0 = perceiving, 100 = judging.
    pub perceiving_judging: u32,
    /// Qualitative labels such as `"Helpful"` or `"Analytical"`.
    pub characteristics: Vec<String>,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self {
            introvert_extrovert: 50,
            intuition_sensing: 50,
            feeling_thinking: 50,
            perceiving_judging: 50,
            characteristics: Vec::new(),
        }
    }
}

/// Motivation category scores in `[0, 100]`, kept in table order.
///
/// Backed by an insertion-ordered list of `(category, score)` pairs so the
/// rendered report always lists categories in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotivationProfile {
    scores: Vec<(String, u32)>,
}

impl MotivationProfile {
    /// Append a category score, preserving insertion order.
    pub fn push(&mut self, category: impl Into<String>, score: u32) {
        self.scores.push((category.into(), score));
    }

    /// Look up the score for a category.
    pub fn get(&self, category: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| *score)
    }

    /// Iterate `(category, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Number of categories scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether any category was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// A complete inferred persona for one Reddit user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaRecord {
    /// Reddit username (without the `u/` prefix).
    pub username: String,
    /// Canonical profile URL.
    pub profile_url: String,
    /// Instant the analysis ran, from the injected clock.
    pub analyzed_at: DateTime<Utc>,
    /// Total posts analyzed.
    pub post_count: usize,
    /// Total comments analyzed.
    pub comment_count: usize,
    /// Inferred demographics.
    pub demographics: Demographics,
    /// Personality axis scores and characteristics.
    pub personality: PersonalityProfile,
    /// Motivation category scores.
    pub motivations: MotivationProfile,
    /// Behavioral pattern descriptions, strongest first.
    pub behaviors: Vec<String>,
    /// Deduplicated frustration descriptions.
    pub frustrations: Vec<String>,
    /// Deduplicated goal descriptions.
    pub goals: Vec<String>,
    /// First [`SAMPLE_POSTS`] posts, kept for citations.
    pub sample_posts: Vec<Post>,
    /// First [`SAMPLE_COMMENTS`] comments, kept for citations.
    pub sample_comments: Vec<Comment>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographics_default_is_unknown() {
        let demo = Demographics::default();
        assert_eq!(demo.age_range, "Unknown");
        assert_eq!(demo.occupation, "Unknown");
        assert_eq!(demo.relationship_status, "Unknown");
        assert_eq!(demo.location, "Unknown");
    }

    #[test]
    fn test_personality_default_is_neutral() {
        let p = PersonalityProfile::default();
        assert_eq!(p.introvert_extrovert, 50);
        assert_eq!(p.intuition_sensing, 50);
        assert_eq!(p.feeling_thinking, 50);
        assert_eq!(p.perceiving_judging, 50);
        assert!(p.characteristics.is_empty());
    }

    #[test]
    fn test_motivation_profile_preserves_insertion_order() {
        let mut m = MotivationProfile::default();
        m.push("wellness", 30);
        m.push("comfort", 10);
        m.push("speed", 100);
        let order: Vec<&str> = m.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["wellness", "comfort", "speed"]);
        assert_eq!(m.get("comfort"), Some(10));
        assert_eq!(m.get("missing"), None);
    }
}
