//! Behavioral pattern extraction: subreddit activity and frequency tiers.

use crate::types::{Comment, Post};

/// Describe the user's top communities and posting/commenting frequency.
///
/// Subreddit frequencies are counted in an insertion-ordered structure and
/// sorted with a stable sort, so subreddits tied on count keep their
/// first-seen order in the top-3 selection.
pub(crate) fn analyze(posts: &[Post], comments: &[Comment]) -> Vec<String> {
    let mut behaviors = Vec::new();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let subreddits = posts
        .iter()
        .map(|p| p.subreddit.as_str())
        .chain(comments.iter().map(|c| c.subreddit.as_str()));
    for subreddit in subreddits {
        if subreddit.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| *name == subreddit) {
            Some((_, count)) => *count += 1,
            None => counts.push((subreddit, 1)),
        }
    }

    // Stable: ties keep insertion (first-seen) order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    for (subreddit, count) in counts.iter().take(3) {
        behaviors.push(format!(
            "Active in r/{subreddit} community with {count} posts/comments"
        ));
    }

    if posts.len() > 20 {
        behaviors.push("Frequent poster - shares content regularly".to_string());
    } else if posts.len() > 5 {
        behaviors.push("Occasional poster - shares content sometimes".to_string());
    }

    if comments.len() > 50 {
        behaviors.push("Very active commenter - engages frequently in discussions".to_string());
    } else if comments.len() > 20 {
        behaviors.push("Regular commenter - participates in community discussions".to_string());
    }

    behaviors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn post_in(subreddit: &str) -> Post {
        Post {
            subreddit: subreddit.to_string(),
            ..Post::default()
        }
    }

    fn comment_in(subreddit: &str) -> Comment {
        Comment {
            subreddit: subreddit.to_string(),
            ..Comment::default()
        }
    }

    #[test]
    fn test_empty_input_yields_no_behaviors() {
        assert!(analyze(&[], &[]).is_empty());
    }

    #[test]
    fn test_top_three_ties_keep_first_seen_order() {
        // python and golang tie at 5; python was seen first.
        let mut posts = Vec::new();
        for _ in 0..5 {
            posts.push(post_in("python"));
        }
        for _ in 0..5 {
            posts.push(post_in("golang"));
        }
        posts.push(post_in("rust"));
        let comments = vec![comment_in("rust")];

        let behaviors = analyze(&posts, &comments);
        assert_eq!(
            behaviors[0],
            "Active in r/python community with 5 posts/comments"
        );
        assert_eq!(
            behaviors[1],
            "Active in r/golang community with 5 posts/comments"
        );
        assert_eq!(
            behaviors[2],
            "Active in r/rust community with 2 posts/comments"
        );
    }

    #[test]
    fn test_only_three_subreddits_reported() {
        let posts: Vec<Post> = ["a", "a", "b", "b", "c", "d"]
            .iter()
            .map(|s| post_in(s))
            .collect();
        let behaviors = analyze(&posts, &[]);
        let community_lines = behaviors
            .iter()
            .filter(|b| b.contains("community with"))
            .count();
        assert_eq!(community_lines, 3);
    }

    #[test]
    fn test_empty_subreddit_names_are_skipped() {
        let posts = vec![post_in(""), post_in("rust")];
        let behaviors = analyze(&posts, &[]);
        assert_eq!(
            behaviors,
            vec!["Active in r/rust community with 1 posts/comments".to_string()]
        );
    }

    #[test]
    fn test_posting_frequency_tiers() {
        let posts: Vec<Post> = (0..21).map(|_| post_in("rust")).collect();
        let behaviors = analyze(&posts, &[]);
        assert!(behaviors.contains(&"Frequent poster - shares content regularly".to_string()));

        let posts: Vec<Post> = (0..6).map(|_| post_in("rust")).collect();
        let behaviors = analyze(&posts, &[]);
        assert!(behaviors.contains(&"Occasional poster - shares content sometimes".to_string()));

        // Thresholds are strict: exactly 5 posts is below the tier.
        let posts: Vec<Post> = (0..5).map(|_| post_in("rust")).collect();
        let behaviors = analyze(&posts, &[]);
        assert!(!behaviors.iter().any(|b| b.contains("poster")));
    }

    #[test]
    fn test_commenting_frequency_tiers() {
        let comments: Vec<Comment> = (0..51).map(|_| comment_in("rust")).collect();
        let behaviors = analyze(&[], &comments);
        assert!(behaviors
            .contains(&"Very active commenter - engages frequently in discussions".to_string()));

        let comments: Vec<Comment> = (0..21).map(|_| comment_in("rust")).collect();
        let behaviors = analyze(&[], &comments);
        assert!(behaviors
            .contains(&"Regular commenter - participates in community discussions".to_string()));
    }
}
