//! Plain-text rendering of Reddit content
//!
//! Downstream consumers parse this layout, so it must stay byte-for-byte stable.

use crate::reddit::{Comment, Submission};

/// Marker printed for posts without a self-text body
pub const NO_TEXT_CONTENT: &str = "[No text content]";

/// Marker printed for deleted or missing authors
const ABSENT_AUTHOR: &str = "None";

/// Render a Unix timestamp the way the consumers expect floats:
/// integral values keep one decimal place (`1700000000.0`)
pub fn format_created(created_utc: f64) -> String {
    if created_utc.is_finite() && created_utc.fract() == 0.0 {
        format!("{:.1}", created_utc)
    } else {
        format!("{}", created_utc)
    }
}

fn author_or_absent(author: Option<&str>) -> &str {
    author.unwrap_or(ABSENT_AUTHOR)
}

/// One listing block, terminated by a `---` line
pub fn format_listing_block(post: &Submission) -> String {
    format!(
        "Title: {}\nID: {}\nScore: {}\nURL: {}\nCreated: {}\n---",
        post.title,
        post.id,
        post.score,
        post.url,
        format_created(post.created_utc)
    )
}

/// Listing blocks separated by a blank line; empty input yields an empty string
pub fn format_listing(posts: &[Submission]) -> String {
    posts
        .iter()
        .map(format_listing_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_comment(comment: &Comment) -> String {
    format!(
        "\nComment by {} (Score: {}):\n{}\n---",
        author_or_absent(comment.author.as_deref()),
        comment.score,
        comment.body
    )
}

/// Post header followed by at most `comment_limit` top-level comments
pub fn format_post_details(post: &Submission, comment_limit: usize) -> String {
    let content = post
        .selftext
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_TEXT_CONTENT);

    let mut lines = vec![
        format!("Title: {}", post.title),
        format!("Author: {}", author_or_absent(post.author.as_deref())),
        format!("Score: {}", post.score),
        format!("Content: {}", content),
        format!("URL: {}", post.url),
        "\nTop Comments:".to_string(),
    ];

    lines.extend(post.comments.iter().take(comment_limit).map(format_comment));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.to_string(),
            title: format!("Title {}", id),
            score: 12,
            url: format!("https://i.redd.it/{}.png", id),
            created_utc: 1700000000.0,
            author: Some("alice".to_string()),
            selftext: Some("body text".to_string()),
            comments: vec![],
        }
    }

    #[test]
    fn test_format_created() {
        assert_eq!(format_created(1700000000.0), "1700000000.0");
        assert_eq!(format_created(1700000000.5), "1700000000.5");
        assert_eq!(format_created(0.0), "0.0");
    }

    #[test]
    fn test_listing_block_layout() {
        assert_eq!(
            format_listing_block(&submission("a1")),
            "Title: Title a1\nID: a1\nScore: 12\nURL: https://i.redd.it/a1.png\nCreated: 1700000000.0\n---"
        );
    }

    #[test]
    fn test_listing_joins_with_blank_line() {
        let text = format_listing(&[submission("a"), submission("b")]);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.ends_with("\n---")));
    }

    #[test]
    fn test_empty_listing_is_empty() {
        assert_eq!(format_listing(&[]), "");
    }

    #[test]
    fn test_post_details_layout() {
        let mut post = submission("p");
        post.comments = vec![
            Comment {
                author: Some("bob".to_string()),
                score: 4,
                body: "first!".to_string(),
            },
            Comment {
                author: None,
                score: -1,
                body: "[removed]".to_string(),
            },
        ];

        assert_eq!(
            format_post_details(&post, 10),
            "Title: Title p\n\
             Author: alice\n\
             Score: 12\n\
             Content: body text\n\
             URL: https://i.redd.it/p.png\n\
             \n\
             Top Comments:\n\
             \n\
             Comment by bob (Score: 4):\n\
             first!\n\
             ---\n\
             \n\
             Comment by None (Score: -1):\n\
             [removed]\n\
             ---"
        );
    }

    #[test]
    fn test_post_details_truncates_comments() {
        let mut post = submission("p");
        post.comments = (0..5)
            .map(|i| Comment {
                author: Some(format!("user{}", i)),
                score: i,
                body: format!("comment {}", i),
            })
            .collect();

        let text = format_post_details(&post, 2);
        assert_eq!(text.matches("Comment by").count(), 2);
        assert!(text.contains("comment 1"));
        assert!(!text.contains("comment 2"));
    }

    #[test]
    fn test_empty_selftext_uses_marker() {
        let mut post = submission("p");
        post.selftext = Some(String::new());
        assert!(format_post_details(&post, 0).contains("\nContent: [No text content]\n"));

        post.selftext = None;
        post.author = None;
        let text = format_post_details(&post, 0);
        assert!(text.contains("Content: [No text content]"));
        assert!(text.contains("Author: None"));
        assert!(text.ends_with("\n\nTop Comments:"));
    }
}
