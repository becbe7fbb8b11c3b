use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogDetailError {
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBlogDetailUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogDetail, GetBlogDetailError>;
}
