use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactSubmissionsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListContactSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError>;
}
