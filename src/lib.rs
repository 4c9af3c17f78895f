//! # Personagen
//!
//! Generates detailed user personas from Reddit profiles, with citations
//! back to the posts and comments that evidence each claim.
//!
//! The pipeline is three components consumed in sequence:
//!
//! 1. [`RedditScraper`] fetches a user's public posts and comments.
//! 2. [`PersonaAnalyzer`] applies keyword heuristics to infer demographics,
//!    personality axes, motivations, behaviors, frustrations, and goals.
//! 3. [`ReportRenderer`] turns the persona record into a formatted,
//!    citation-annotated text report.
//!
//! The analyzer and renderer are pure, deterministic transformations; the
//! only wall-clock reads go through an injected [`Clock`] so tests can pin
//! a fixed instant.  Classification is literal substring matching against
//! curated keyword tables: no machine learning, no statistical inference.

pub mod analyzer;
pub mod clock;
pub mod error;
pub mod persona;
pub mod report;
pub mod scraper;
pub mod types;

pub use analyzer::{AnalyzerConfig, PersonaAnalyzer};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::PersonaError;
pub use persona::{Demographics, MotivationProfile, PersonaRecord, PersonalityProfile};
pub use report::ReportRenderer;
pub use scraper::RedditScraper;
pub use types::{Comment, Post};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
