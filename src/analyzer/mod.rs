//! Heuristic persona analysis engine.
//!
//! [`PersonaAnalyzer::analyze`] is a deterministic, keyword-driven
//! classifier over already-fetched posts and comments.  All sub-analyses run
//! against the same combined lowercase text; the only non-pure input is the
//! analysis timestamp, which comes from an injected [`Clock`].
//!
//! There are no error paths: missing fields are empty strings and zeros by
//! construction, and empty input sequences produce a neutral persona.

pub mod keywords;

mod behavior;
mod demographics;
mod findings;
mod motivations;
mod personality;

use crate::clock::{Clock, SystemClock};
use crate::persona::{PersonaRecord, SAMPLE_COMMENTS, SAMPLE_POSTS};
use crate::types::{Comment, Post};

pub use keywords::AnalyzerConfig;

/// Sum of literal (non-overlapping) substring occurrence counts.
pub(crate) fn occurrences(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().map(|kw| text.matches(kw).count()).sum()
}

/// Keyword-driven persona classifier.
///
/// Owns its keyword tables as explicit immutable configuration; the default
/// construction uses the curated tables in [`keywords`].
#[derive(Debug)]
pub struct PersonaAnalyzer {
    config: AnalyzerConfig,
    clock: Box<dyn Clock>,
}

impl Default for PersonaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaAnalyzer {
    /// Analyzer with the curated keyword tables and the system clock.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Analyzer with substituted tables and/or clock.
    pub fn with_parts(config: AnalyzerConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Build a complete persona record from fetched content.
    ///
    /// Deterministic for identical inputs, apart from the recorded
    /// timestamp.  Input ordering only matters where documented: sample
    /// retention takes the first items, and subreddit tie-breaking follows
    /// first-seen order.
    pub fn analyze(
        &self,
        username: &str,
        posts: &[Post],
        comments: &[Comment],
    ) -> PersonaRecord {
        let text = combined_text(posts, comments);
        tracing::debug!(
            username,
            posts = posts.len(),
            comments = comments.len(),
            chars = text.len(),
            "analyzing profile content"
        );

        PersonaRecord {
            username: username.to_string(),
            profile_url: format!("https://www.reddit.com/user/{username}/"),
            analyzed_at: self.clock.now(),
            post_count: posts.len(),
            comment_count: comments.len(),
            demographics: demographics::analyze(&self.config, &text),
            personality: personality::analyze(&self.config, &text),
            motivations: motivations::analyze(&self.config, &text),
            behaviors: behavior::analyze(posts, comments),
            frustrations: findings::match_categories(&self.config.frustrations, &text),
            goals: findings::match_categories(&self.config.goals, &text),
            sample_posts: posts.iter().take(SAMPLE_POSTS).cloned().collect(),
            sample_comments: comments.iter().take(SAMPLE_COMMENTS).cloned().collect(),
        }
    }
}

/// Concatenate every text field (post titles and bodies, comment bodies)
/// into one case-folded, space-joined string.
fn combined_text(posts: &[Post], comments: &[Comment]) -> String {
    let mut pieces: Vec<&str> = Vec::with_capacity(posts.len() * 2 + comments.len());
    for post in posts {
        pieces.push(&post.title);
        pieces.push(&post.body);
    }
    for comment in comments {
        pieces.push(&comment.body);
    }
    pieces.join(" ").to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
