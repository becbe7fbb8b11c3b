use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkContactReadError {
    #[error("Contact submission not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkContactReadUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactSubmission, MarkContactReadError>;
}
