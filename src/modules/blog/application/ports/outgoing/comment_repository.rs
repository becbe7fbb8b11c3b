use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{Comment, CommentStatusFilter};

//
// ──────────────────────────────────────────────────────────
// Data
// ──────────────────────────────────────────────────────────
//

/// Sanitized comment ready for storage; always stored unapproved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
}

/// A comment together with its post's `comments_count` after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithCount {
    pub comment: Comment,
    pub comments_count: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts the comment and sets the post's counter to approved + 1, atomically.
    async fn record_submission(
        &self,
        comment: NewComment,
    ) -> Result<CommentWithCount, CommentRepositoryError>;

    /// Flips approval and recounts the post's counter to the exact approved count.
    async fn set_approval(
        &self,
        comment_id: Uuid,
        is_approved: bool,
    ) -> Result<CommentWithCount, CommentRepositoryError>;

    /// Newest first.
    async fn list_comments(
        &self,
        status: CommentStatusFilter,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;
}
