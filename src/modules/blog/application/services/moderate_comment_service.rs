use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    ModerateCommentError, ModerateCommentUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CommentWithCount,
};

pub struct ModerateCommentService<R>
where
    R: CommentRepository,
{
    repository: R,
}

impl<R> ModerateCommentService<R>
where
    R: CommentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ModerateCommentUseCase for ModerateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        comment_id: Uuid,
        is_approved: bool,
    ) -> Result<CommentWithCount, ModerateCommentError> {
        let moderated = self
            .repository
            .set_approval(comment_id, is_approved)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => ModerateCommentError::NotFound,
                CommentRepositoryError::DatabaseError(msg) => {
                    ModerateCommentError::RepositoryError(msg)
                }
            })?;

        info!(
            %comment_id,
            is_approved,
            comments_count = moderated.comments_count,
            "Comment moderated"
        );

        Ok(moderated)
    }
}
