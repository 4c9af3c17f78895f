//! Persona report rendering and persistence.
//!
//! [`ReportRenderer::render`] turns a [`PersonaRecord`] into a fixed-layout
//! text document with bar gauges and citation lines.  The layout is a golden
//! contract: tests assert byte-identical output for a frozen persona and a
//! fixed clock.

use std::fs;
use std::path::Path;

use crate::clock::{Clock, SystemClock};
use crate::error::PersonaError;
use crate::persona::PersonaRecord;

/// Width of the section banners.
const BANNER_WIDTH: usize = 80;

/// Width of the section rules.
const RULE_WIDTH: usize = 40;

/// Total characters in a bar gauge.
const GAUGE_WIDTH: u32 = 10;

/// Minimum post body length for the representative quote.
const QUOTE_POST_MIN_CHARS: usize = 50;

/// Minimum comment body length for the quote fallback.
const QUOTE_COMMENT_MIN_CHARS: usize = 30;

/// Quote truncation length.
const QUOTE_MAX_CHARS: usize = 150;

/// Motivation scores at or below this are omitted from the report.
const MOTIVATION_DISPLAY_THRESHOLD: u32 = 20;

/// Renders persona records into formatted text reports.
#[derive(Debug)]
pub struct ReportRenderer {
    clock: Box<dyn Clock>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Renderer stamping reports with the system clock.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Renderer with an injected clock, for reproducible output.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Render the full report.  Pure given the persona and the clock.
    pub fn render(&self, persona: &PersonaRecord) -> String {
        let mut lines: Vec<String> = Vec::new();

        // Header
        lines.push("=".repeat(BANNER_WIDTH));
        lines.push(format!("USER PERSONA: {}", persona.username.to_uppercase()));
        lines.push("=".repeat(BANNER_WIDTH));
        lines.push(String::new());

        // Basic information
        lines.push("BASIC INFORMATION".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!("{:<15}{}", "AGE:", persona.demographics.age_range));
        lines.push(format!(
            "{:<15}{}",
            "OCCUPATION:", persona.demographics.occupation
        ));
        lines.push(format!(
            "{:<15}{}",
            "STATUS:", persona.demographics.relationship_status
        ));
        lines.push(format!(
            "{:<15}{}",
            "LOCATION:", persona.demographics.location
        ));
        lines.push(String::new());

        // Personality gauges
        lines.push("PERSONALITY TRAITS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        let personality = &persona.personality;
        lines.push(axis_gauge(
            "INTROVERT",
            personality.introvert_extrovert,
            "EXTROVERT",
        ));
        lines.push(axis_gauge(
            "INTUITION",
            personality.intuition_sensing,
            "SENSING",
        ));
        lines.push(axis_gauge("FEELING", personality.feeling_thinking, "THINKING"));
        lines.push(axis_gauge(
            "PERCEIVING",
            personality.perceiving_judging,
            "JUDGING",
        ));
        lines.push(String::new());

        if !personality.characteristics.is_empty() {
            lines.push("CHARACTERISTICS:".to_string());
            for label in &personality.characteristics {
                lines.push(format!("• {label}"));
            }
            lines.push(String::new());
        }

        // Motivations above the display threshold
        lines.push("MOTIVATIONS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for (category, score) in persona.motivations.iter() {
            if score > MOTIVATION_DISPLAY_THRESHOLD {
                let filled = score / GAUGE_WIDTH;
                lines.push(format!(
                    "{:<15} {}{} ({}%)",
                    title_case(category),
                    "█".repeat(filled as usize),
                    "░".repeat((GAUGE_WIDTH - filled) as usize),
                    score
                ));
            }
        }
        lines.push(String::new());

        // Behaviors, citing the named subreddit
        lines.push("BEHAVIOUR & HABITS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for behavior in &persona.behaviors {
            lines.push(format!("• {behavior}"));
            if let Some(subreddit) = cited_subreddit(behavior) {
                lines.push(format!("  Citation: Active in r/{subreddit} subreddit"));
            }
        }
        lines.push(String::new());

        // Frustrations, all cited to the first sample post
        lines.push("FRUSTRATIONS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for frustration in &persona.frustrations {
            lines.push(format!("• {frustration}"));
            if let Some(post) = persona.sample_posts.first() {
                lines.push(format!("  Citation: Post ID {}", post.id));
            }
        }
        lines.push(String::new());

        // Goals, all cited to the first sample comment
        lines.push("GOALS & NEEDS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for goal in &persona.goals {
            lines.push(format!("• {goal}"));
            if let Some(comment) = persona.sample_comments.first() {
                lines.push(format!("  Citation: Comment ID {}", comment.id));
            }
        }
        lines.push(String::new());

        // Representative quote, omitted when nothing qualifies
        if let Some((quote, citation)) = representative_quote(persona) {
            lines.push("REPRESENTATIVE QUOTE".to_string());
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(format!("\"{quote}\""));
            lines.push(format!("Source: {citation}"));
        }

        // Closing banner
        lines.push(String::new());
        lines.push("=".repeat(BANNER_WIDTH));
        lines.push(format!(
            "Analysis completed on {}",
            self.clock.now().format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!(
            "Based on {} posts and {} comments",
            persona.post_count, persona.comment_count
        ));
        lines.push("=".repeat(BANNER_WIDTH));

        lines.join("\n")
    }

    /// Render and persist the report.
    ///
    /// Without an explicit filename the report lands in
    /// `<username>_persona.txt`.  Returns the path written.
    pub fn save(
        &self,
        persona: &PersonaRecord,
        filename: Option<&str>,
    ) -> Result<String, PersonaError> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => default_filename(&persona.username),
        };
        let text = self.render(persona);
        fs::write(Path::new(&filename), text)?;
        Ok(filename)
    }
}

/// Default report filename for a username.
pub fn default_filename(username: &str) -> String {
    format!("{username}_persona.txt")
}

/// One personality axis line: left label padded to 10 columns, a 10-character
/// gauge, a space, then the right label.
///
/// The filled portion is `10 - score/10`: it shrinks as the score rises
/// toward the right-hand pole.  The inverse mapping is part of the layout
/// contract and must not be "fixed".
fn axis_gauge(left: &str, score: u32, right: &str) -> String {
    let track = score / GAUGE_WIDTH;
    let filled = GAUGE_WIDTH - track;
    format!(
        "{:<10}{}{} {}",
        left,
        "█".repeat(filled as usize),
        "░".repeat(track as usize),
        right
    )
}

/// Subreddit named in a behavior string: the text after the first `r/` up to
/// the next space.
fn cited_subreddit(behavior: &str) -> Option<&str> {
    let rest = &behavior[behavior.find("r/")? + 2..];
    Some(rest.split(' ').next().unwrap_or(rest))
}

/// Pick the representative quote: the first sample post with a body longer
/// than 50 characters, else the first sample comment with a body longer than
/// 30 characters.  Returns `(quote, citation)`.
fn representative_quote(persona: &PersonaRecord) -> Option<(String, String)> {
    for post in &persona.sample_posts {
        if post.body.chars().count() > QUOTE_POST_MIN_CHARS {
            return Some((
                truncate_chars(&post.body, QUOTE_MAX_CHARS),
                format!("Post: {} (ID: {})", post.title, post.id),
            ));
        }
    }
    for comment in &persona.sample_comments {
        if comment.body.chars().count() > QUOTE_COMMENT_MIN_CHARS {
            return Some((
                truncate_chars(&comment.body, QUOTE_MAX_CHARS),
                format!("Comment ID: {}", comment.id),
            ));
        }
    }
    None
}

/// Truncate to at most `max` characters (not bytes) and append an ellipsis
/// marker.
fn truncate_chars(text: &str, max: usize) -> String {
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

/// Title-case a category name: underscores become spaces and each word is
/// capitalized, so `dietary_needs` renders as `Dietary Needs`.
fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
