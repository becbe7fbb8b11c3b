use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSitemapError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSitemapUseCase: Send + Sync {
    /// The rendered XML document.
    async fn execute(&self) -> Result<String, GetSitemapError>;
}
