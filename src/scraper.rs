//! Reddit data fetching.
//!
//! Pulls a user's public posts and comments from the Reddit JSON endpoints
//! via `reqwest`, with retry and exponential backoff on 429/5xx.  Listing
//! decoding is lenient: every field defaults, so partial records map to
//! empty strings and zeros instead of failing the whole fetch.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::PersonaError;
use crate::types::{Comment, Post};

/// User agent sent with every request.
const USER_AGENT: &str = "PersonaGenerator/1.0 (Educational Purpose)";

/// Default Reddit API base URL.
const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Per-request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Retries after the first attempt.
const MAX_RETRIES: u32 = 3;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reddit\.com/user/([a-zA-Z0-9_-]+)").unwrap());

static PROFILE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(www\.)?reddit\.com/user/[a-zA-Z0-9_-]+/?$").unwrap());

/// Check that a URL is a well-formed Reddit profile URL.
pub fn validate_profile_url(url: &str) -> bool {
    PROFILE_URL_RE.is_match(url)
}

/// Extract the username from a Reddit profile URL.
pub fn extract_username(profile_url: &str) -> Result<String, PersonaError> {
    USERNAME_RE
        .captures(profile_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PersonaError::InvalidUrl {
            url: profile_url.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Listing envelope
// ---------------------------------------------------------------------------

/// Top-level Reddit listing response.
#[derive(Debug, Default, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Debug, Default, Deserialize)]
struct Thing {
    #[serde(default)]
    data: RawItem,
}

/// One listing child.  Posts and comments share the shape; fields absent for
/// the other kind simply default.
#[derive(Debug, Default, Deserialize)]
struct RawItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    num_comments: u64,
    #[serde(default)]
    link_title: String,
}

fn permalink_url(permalink: &str) -> String {
    format!("https://reddit.com{permalink}")
}

fn into_posts(listing: Listing) -> Vec<Post> {
    listing
        .data
        .children
        .into_iter()
        .map(|thing| {
            let raw = thing.data;
            Post {
                id: raw.id,
                title: raw.title,
                body: raw.selftext,
                subreddit: raw.subreddit,
                score: raw.score,
                created_at: raw.created_utc,
                url: permalink_url(&raw.permalink),
                comment_count: raw.num_comments,
            }
        })
        .collect()
}

fn into_comments(listing: Listing) -> Vec<Comment> {
    listing
        .data
        .children
        .into_iter()
        .map(|thing| {
            let raw = thing.data;
            Comment {
                id: raw.id,
                body: raw.body,
                subreddit: raw.subreddit,
                score: raw.score,
                created_at: raw.created_utc,
                url: permalink_url(&raw.permalink),
                parent_title: raw.link_title,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scraper
// ---------------------------------------------------------------------------

/// Async client for the Reddit user listing endpoints.
#[derive(Debug, Clone)]
pub struct RedditScraper {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl Default for RedditScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl RedditScraper {
    /// Scraper against the public Reddit API.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: MAX_RETRIES,
        }
    }

    /// Scraper against a custom base URL, for tests against a local server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new()
        }
    }

    /// Fetch up to `limit` of the user's submissions.
    pub async fn fetch_posts(&self, username: &str, limit: u32) -> Result<Vec<Post>, PersonaError> {
        let url = format!("{}/user/{}/submitted.json", self.base_url, username);
        let listing = self.get_listing(&url, limit).await?;
        Ok(into_posts(listing))
    }

    /// Fetch up to `limit` of the user's comments.
    pub async fn fetch_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<Comment>, PersonaError> {
        let url = format!("{}/user/{}/comments.json", self.base_url, username);
        let listing = self.get_listing(&url, limit).await?;
        Ok(into_comments(listing))
    }

    /// GET a listing endpoint with retry and exponential backoff on
    /// 429/500/502/503/504.  Other 4xx statuses are terminal.
    async fn get_listing(&self, url: &str, limit: u32) -> Result<Listing, PersonaError> {
        let mut last_error: Option<PersonaError> = None;
        let mut retry_delay = Duration::from_secs(1);

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tracing::warn!(url, attempt, delay = ?retry_delay, "retrying Reddit request");
                tokio::time::sleep(retry_delay).await;
                retry_delay *= 2;
            }

            let response = match self
                .client
                .get(url)
                .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = Some(PersonaError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if retryable_status(status.as_u16()) {
                last_error = Some(PersonaError::HttpStatus {
                    status: status.as_u16(),
                });
                continue;
            }
            if !status.is_success() {
                return Err(PersonaError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let text = response.text().await?;
            return Ok(serde_json::from_str(&text)?);
        }

        Err(last_error.unwrap_or(PersonaError::HttpStatus { status: 0 }))
    }
}

/// Statuses worth retrying, matching the fetch retry policy.
fn retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_profile_url() {
        assert!(validate_profile_url("https://www.reddit.com/user/spez/"));
        assert!(validate_profile_url("https://reddit.com/user/spez"));
        assert!(validate_profile_url("http://www.reddit.com/user/some_user-01/"));
        assert!(!validate_profile_url("https://www.reddit.com/r/rust/"));
        assert!(!validate_profile_url("https://www.reddit.com/user/spez/comments"));
        assert!(!validate_profile_url("https://example.com/user/spez/"));
        assert!(!validate_profile_url("not a url"));
    }

    #[test]
    fn test_extract_username() {
        let name = extract_username("https://www.reddit.com/user/spez/").unwrap();
        assert_eq!(name, "spez");

        let err = extract_username("https://example.com/profile/spez").unwrap_err();
        assert!(matches!(err, PersonaError::InvalidUrl { .. }));
    }

    #[test]
    fn test_listing_decodes_posts_with_missing_fields() {
        let json = r#"{
            "data": {
                "children": [
                    {"data": {"id": "p1", "title": "Hello", "subreddit": "rust",
                              "permalink": "/r/rust/comments/p1/hello/"}},
                    {"data": {}}
                ]
            }
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        let posts = into_posts(listing);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(posts[0].url, "https://reddit.com/r/rust/comments/p1/hello/");
        assert_eq!(posts[0].body, "");
        assert_eq!(posts[1].id, "");
        assert_eq!(posts[1].score, 0);
    }

    #[test]
    fn test_listing_decodes_comments() {
        let json = r#"{
            "data": {
                "children": [
                    {"data": {"id": "c1", "body": "nice", "subreddit": "rust",
                              "score": 7, "link_title": "Hello"}}
                ]
            }
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        let comments = into_comments(listing);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].body, "nice");
        assert_eq!(comments[0].score, 7);
        assert_eq!(comments[0].parent_title, "Hello");
    }

    #[test]
    fn test_empty_listing_decodes() {
        let listing: Listing = serde_json::from_str("{}").unwrap();
        assert!(into_posts(listing).is_empty());
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(retryable_status(status));
        }
        for status in [200, 301, 400, 403, 404] {
            assert!(!retryable_status(status));
        }
    }
}
