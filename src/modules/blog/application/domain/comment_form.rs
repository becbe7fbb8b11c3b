use uuid::Uuid;

use crate::shared::text::strip_tags;
use crate::shared::validation::{self, char_len, FieldErrors};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 3;
pub const CONTENT_MAX_CHARS: usize = 1000;

pub const NAME_TOO_SHORT: &str = "Name is too short.";
pub const COMMENT_TOO_SHORT: &str = "Comment is too short.";
pub const COMMENT_TOO_LONG: &str = "Comment is too long (max 1000 characters).";

/// Raw visitor input for a new comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSubmission {
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub parent_id: Option<Uuid>,
    /// Honeypot; real visitors never see or fill it.
    pub website: String,
}

/// Submission fields after trimming and markup stripping. Not yet HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanComment {
    pub author_name: String,
    pub author_email: String,
    pub content: String,
}

impl CommentSubmission {
    pub fn is_spam(&self) -> bool {
        !self.website.trim().is_empty()
    }

    /// Validates every field and reports all failures at once.
    pub fn validate(&self) -> Result<CleanComment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let author_name = clean_name(&mut errors, &self.author_name);
        let author_email = validation::valid_email(&mut errors, "author_email", &self.author_email);
        let content = clean_content(&mut errors, &self.content);

        match (author_name, author_email, content) {
            (Some(author_name), Some(author_email), Some(content)) => Ok(CleanComment {
                author_name,
                author_email,
                content,
            }),
            _ => Err(errors),
        }
    }
}

fn clean_name(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    let name = validation::required(errors, "author_name", raw)?;
    let name = strip_tags(&name).trim().to_string();

    if char_len(&name) < NAME_MIN_CHARS {
        errors.add("author_name", NAME_TOO_SHORT);
        return None;
    }
    if !validation::within_max_length(errors, "author_name", &name, NAME_MAX_CHARS) {
        return None;
    }
    Some(name)
}

fn clean_content(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    let content = validation::required(errors, "content", raw)?;
    let content = strip_tags(&content).trim().to_string();

    let len = char_len(&content);
    if len < CONTENT_MIN_CHARS {
        errors.add("content", COMMENT_TOO_SHORT);
        return None;
    }
    if len > CONTENT_MAX_CHARS {
        errors.add("content", COMMENT_TOO_LONG);
        return None;
    }
    Some(content)
}
