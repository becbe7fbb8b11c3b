use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsError, ListContactSubmissionsUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct ListContactSubmissionsService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ListContactSubmissionsService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactSubmissionsUseCase for ListContactSubmissionsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        self.repository.list().await.map_err(|e| match e {
            ContactRepositoryError::DatabaseError(msg) => {
                ListContactSubmissionsError::RepositoryError(msg)
            }
            other => ListContactSubmissionsError::RepositoryError(other.to_string()),
        })
    }
}
