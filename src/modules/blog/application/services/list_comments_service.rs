use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{Comment, CommentStatusFilter};
use crate::modules::blog::application::ports::incoming::use_cases::{
    ListCommentsError, ListCommentsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError,
};

pub struct ListCommentsService<R>
where
    R: CommentRepository,
{
    repository: R,
}

impl<R> ListCommentsService<R>
where
    R: CommentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCommentsUseCase for ListCommentsService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        status: CommentStatusFilter,
    ) -> Result<Vec<Comment>, ListCommentsError> {
        self.repository
            .list_comments(status)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => {
                    ListCommentsError::RepositoryError("unexpected not found".to_string())
                }
                CommentRepositoryError::DatabaseError(msg) => {
                    ListCommentsError::RepositoryError(msg)
                }
            })
    }
}
