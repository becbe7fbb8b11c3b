use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactSubmission, NewContactSubmission,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact submission not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores the submission unread with a server-assigned timestamp.
    async fn create(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError>;

    async fn set_read(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactSubmission, ContactRepositoryError>;
}
