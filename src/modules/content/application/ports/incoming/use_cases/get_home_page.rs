use async_trait::async_trait;

use crate::modules::content::application::domain::entities::HomePage;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHomePageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, GetHomePageError>;
}
