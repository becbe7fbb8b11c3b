use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{Comment, CommentStatusFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(&self, status: CommentStatusFilter)
        -> Result<Vec<Comment>, ListCommentsError>;
}
