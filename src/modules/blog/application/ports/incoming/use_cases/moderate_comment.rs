use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::CommentWithCount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ModerateCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ModerateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        comment_id: Uuid,
        is_approved: bool,
    ) -> Result<CommentWithCount, ModerateCommentError>;
}
