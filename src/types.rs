//! Data models for fetched Reddit content.
//!
//! A [`Post`] or [`Comment`] is immutable once fetched.  Every field carries
//! `#[serde(default)]` so records decoded from partial JSON degrade to empty
//! strings and zeros instead of failing.

use serde::{Deserialize, Serialize};

/// A submission made by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Reddit base36 post ID.
    #[serde(default)]
    pub id: String,
    /// Submission title.
    #[serde(default)]
    pub title: String,
    /// Self-text body (empty for link posts).
    #[serde(default)]
    pub body: String,
    /// Subreddit the post was made in (without the `r/` prefix).
    #[serde(default)]
    pub subreddit: String,
    /// Net vote score.
    #[serde(default)]
    pub score: i64,
    /// Creation time as a UTC epoch timestamp.
    #[serde(default)]
    pub created_at: f64,
    /// Full permalink URL.
    #[serde(default)]
    pub url: String,
    /// Number of comments on the post.
    #[serde(default)]
    pub comment_count: u64,
}

/// A comment made by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Reddit base36 comment ID.
    #[serde(default)]
    pub id: String,
    /// Comment body.
    #[serde(default)]
    pub body: String,
    /// Subreddit the comment was made in (without the `r/` prefix).
    #[serde(default)]
    pub subreddit: String,
    /// Net vote score.
    #[serde(default)]
    pub score: i64,
    /// Creation time as a UTC epoch timestamp.
    #[serde(default)]
    pub created_at: f64,
    /// Full permalink URL.
    #[serde(default)]
    pub url: String,
    /// Title of the post the comment was left on.
    #[serde(default)]
    pub parent_title: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_with_missing_fields() {
        let post: Post = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        assert_eq!(post.id, "abc123");
        assert_eq!(post.title, "");
        assert_eq!(post.body, "");
        assert_eq!(post.score, 0);
        assert_eq!(post.comment_count, 0);
    }

    #[test]
    fn test_comment_decodes_with_missing_fields() {
        let comment: Comment = serde_json::from_str(r#"{"body": "hello"}"#).unwrap();
        assert_eq!(comment.id, "");
        assert_eq!(comment.body, "hello");
        assert_eq!(comment.subreddit, "");
        assert_eq!(comment.created_at, 0.0);
    }
}
