use async_trait::async_trait;

use crate::modules::blog::application::domain::comment_form::CommentSubmission;
use crate::modules::blog::application::ports::outgoing::CommentWithCount;
use crate::shared::validation::FieldErrors;

pub const COMMENT_ACCEPTED_MESSAGE: &str =
    "Thank you! Your comment has been submitted and is awaiting moderation.";
pub const SPAM_REJECTED_MESSAGE: &str = "Invalid submission.";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitCommentError {
    #[error("Post not found")]
    PostNotFound,

    /// Honeypot tripped. Reported to the client as a generic failure.
    #[error("Invalid submission")]
    Spam,

    #[error("Validation failed")]
    Invalid(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        post_slug: &str,
        submission: CommentSubmission,
    ) -> Result<CommentWithCount, SubmitCommentError>;
}
