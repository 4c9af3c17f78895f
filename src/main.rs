//! Persona generator CLI.
//!
//! Fetches a Reddit user's public posts and comments, runs the keyword
//! analysis, and writes the formatted persona report to disk.
//!
//! # Usage
//!
//! ```bash
//! personagen https://www.reddit.com/user/username/ -o persona.txt
//! ```
//!
//! `RUST_LOG` controls the tracing filter (default: "warn").

use anyhow::bail;
use clap::Parser;

use personagen::{scraper, PersonaAnalyzer, PersonaError, RedditScraper, ReportRenderer};

#[derive(Parser, Debug)]
#[command(name = "personagen")]
#[command(version)]
#[command(about = "Generate detailed user personas from Reddit profiles")]
struct Args {
    /// Reddit profile URL (e.g., https://www.reddit.com/user/username/)
    profile_url: String,

    /// Output filename (defaults to <username>_persona.txt)
    #[arg(short, long)]
    output: Option<String>,

    /// Maximum number of posts to analyze
    #[arg(long, default_value_t = 100)]
    posts_limit: u32,

    /// Maximum number of comments to analyze
    #[arg(long, default_value_t = 100)]
    comments_limit: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,personagen=info".into()),
        )
        .init();

    let args = Args::parse();

    if !scraper::validate_profile_url(&args.profile_url) {
        bail!(
            "invalid Reddit profile URL format\nExpected format: https://www.reddit.com/user/username/"
        );
    }

    let username = scraper::extract_username(&args.profile_url)?;
    println!("Analyzing Reddit user: u/{username}");

    let scraper = RedditScraper::new();

    println!("Fetching posts...");
    let posts = match scraper.fetch_posts(&username, args.posts_limit).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch posts");
            Vec::new()
        }
    };
    println!("Found {} posts", posts.len());

    println!("Fetching comments...");
    let comments = match scraper.fetch_comments(&username, args.comments_limit).await {
        Ok(comments) => comments,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch comments");
            Vec::new()
        }
    };
    println!("Found {} comments", comments.len());

    if posts.is_empty() && comments.is_empty() {
        tracing::error!(%username, "the user may be private or inactive");
        return Err(PersonaError::EmptyProfile { username }.into());
    }

    println!("Analyzing content and generating persona...");
    let analyzer = PersonaAnalyzer::new();
    let persona = analyzer.analyze(&username, &posts, &comments);

    let renderer = ReportRenderer::new();
    let output_file = renderer.save(&persona, args.output.as_deref())?;
    println!("Persona report saved to: {output_file}");

    println!("\nPersona Summary:");
    println!(
        "- Demographics: {}, {}",
        persona.demographics.age_range, persona.demographics.occupation
    );
    println!(
        "- Personality: {} traits identified",
        persona.personality.characteristics.len()
    );
    println!("- Behaviors: {} patterns identified", persona.behaviors.len());
    println!("- Goals: {} goals identified", persona.goals.len());

    Ok(())
}
