//! Reddit listing payloads and the domain objects built from them

use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Author name Reddit reports for removed accounts
const DELETED_AUTHOR: &str = "[deleted]";

/// A Reddit post
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub score: i64,
    pub url: String,
    pub created_utc: f64,
    pub author: Option<String>,
    pub selftext: Option<String>,
    pub comments: Vec<Comment>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: Option<String>,
    pub score: i64,
    pub body: String,
}

/// `{"kind": "Listing", "data": {"children": [...]}}`
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
    /// Cursor of the next page; `None` on the last page
    #[serde(default)]
    pub after: Option<String>,
}

/// A listing child, kept untyped until its kind is known
#[derive(Debug, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct LinkData {
    id: String,
    title: String,
    score: i64,
    url: String,
    created_utc: f64,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    selftext: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    #[serde(default)]
    author: Option<String>,
    score: i64,
    #[serde(default)]
    body: String,
}

fn normalize_author(author: Option<String>) -> Option<String> {
    author.filter(|a| a != DELETED_AUTHOR && !a.is_empty())
}

impl Thing {
    /// Decode a `t3` child into a submission without comments
    pub fn into_submission(self) -> Result<Option<Submission>, AppError> {
        if self.kind != "t3" {
            return Ok(None);
        }
        let link: LinkData = serde_json::from_value(self.data)?;
        Ok(Some(Submission {
            id: link.id,
            title: link.title,
            score: link.score,
            url: link.url,
            created_utc: link.created_utc,
            author: normalize_author(link.author),
            selftext: link.selftext,
            comments: Vec::new(),
        }))
    }

    /// Decode a `t1` child; `more` placeholders and other kinds yield `None`
    pub fn into_comment(self) -> Result<Option<Comment>, AppError> {
        if self.kind != "t1" {
            return Ok(None);
        }
        let comment: CommentData = serde_json::from_value(self.data)?;
        Ok(Some(Comment {
            author: normalize_author(comment.author),
            score: comment.score,
            body: comment.body,
        }))
    }
}

impl Listing {
    /// All submissions in the listing, in API order
    pub fn into_submissions(self) -> Result<Vec<Submission>, AppError> {
        let mut submissions = Vec::with_capacity(self.data.children.len());
        for thing in self.data.children {
            if let Some(submission) = thing.into_submission()? {
                submissions.push(submission);
            }
        }
        Ok(submissions)
    }

    /// Resolved top-level comments, dropping "load more comments" placeholders
    pub fn into_comments(self) -> Result<Vec<Comment>, AppError> {
        let mut comments = Vec::with_capacity(self.data.children.len());
        for thing in self.data.children {
            if let Some(comment) = thing.into_comment()? {
                comments.push(comment);
            }
        }
        Ok(comments)
    }
}

/// Decode the `/comments/{id}` payload: the submission listing followed by
/// the comment forest
pub fn submission_from_thread(listings: Vec<Listing>, post_id: &str) -> Result<Submission, AppError> {
    let mut listings = listings.into_iter();

    let mut submission = listings
        .next()
        .map(Listing::into_submissions)
        .transpose()?
        .and_then(|subs| subs.into_iter().next())
        .ok_or_else(|| AppError::NotFound(format!("No submission with id '{}'", post_id)))?;

    if let Some(forest) = listings.next() {
        submission.comments = forest.into_comments()?;
    }

    Ok(submission)
}
