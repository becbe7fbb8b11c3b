use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::blog::application::domain::comment_form::CommentSubmission;
use crate::modules::blog::application::ports::incoming::use_cases::{
    SubmitCommentError, SubmitCommentUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, CommentRepository, CommentRepositoryError, CommentWithCount,
    NewComment,
};
use crate::shared::text::escape_html;

pub struct SubmitCommentService<Q, R>
where
    Q: BlogQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SubmitCommentService<Q, R>
where
    Q: BlogQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SubmitCommentUseCase for SubmitCommentService<Q, R>
where
    Q: BlogQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_slug: &str,
        submission: CommentSubmission,
    ) -> Result<CommentWithCount, SubmitCommentError> {
        let post = self
            .query
            .find_published_by_slug(post_slug)
            .await
            .map_err(|e| match e {
                BlogQueryError::DatabaseError(msg) => SubmitCommentError::RepositoryError(msg),
            })?
            .ok_or(SubmitCommentError::PostNotFound)?;

        if submission.is_spam() {
            warn!(post = %post.slug, "Honeypot field filled; discarding comment");
            return Err(SubmitCommentError::Spam);
        }

        let clean = submission
            .validate()
            .map_err(SubmitCommentError::Invalid)?;

        // A parent that is unknown, unapproved or on another post is dropped, not an error.
        let parent_id = match submission.parent_id {
            Some(candidate) => match self.query.find_approved_comment(post.id, candidate).await {
                Ok(parent) => parent.map(|c| c.id),
                Err(BlogQueryError::DatabaseError(msg)) => {
                    warn!(parent_id = %candidate, "Parent lookup failed, posting top-level: {}", msg);
                    None
                }
            },
            None => None,
        };

        let recorded = self
            .repository
            .record_submission(NewComment {
                post_id: post.id,
                parent_id,
                author_name: escape_html(&clean.author_name),
                author_email: clean.author_email,
                content: escape_html(&clean.content),
            })
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => SubmitCommentError::PostNotFound,
                CommentRepositoryError::DatabaseError(msg) => {
                    SubmitCommentError::RepositoryError(msg)
                }
            })?;

        info!(
            post = %post.slug,
            comment_id = %recorded.comment.id,
            comments_count = recorded.comments_count,
            "Comment submitted for moderation"
        );

        Ok(recorded)
    }
}
