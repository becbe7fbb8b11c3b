use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    MarkContactReadError, MarkContactReadUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct MarkContactReadService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> MarkContactReadService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkContactReadUseCase for MarkContactReadService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactSubmission, MarkContactReadError> {
        let updated = self
            .repository
            .set_read(id, is_read)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => MarkContactReadError::NotFound,
                ContactRepositoryError::DatabaseError(msg) => {
                    MarkContactReadError::RepositoryError(msg)
                }
            })?;

        info!("Contact submission {} marked is_read={}", id, is_read);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;

    use crate::tests::support::contact_mocks::{sample_submission, MockContactRepo};

    #[tokio::test]
    async fn toggles_read_flag() {
        let id = Uuid::new_v4();

        let mut repo = MockContactRepo::new();
        repo.expect_set_read()
            .with(eq(id), eq(true))
            .times(1)
            .returning(|_, _| Ok(sample_submission(true)));

        let service = MarkContactReadService::new(repo);
        let updated = service.execute(id, true).await.unwrap();

        assert!(updated.is_read);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut repo = MockContactRepo::new();
        repo.expect_set_read()
            .returning(|_, _| Err(ContactRepositoryError::NotFound));

        let service = MarkContactReadService::new(repo);

        assert!(matches!(
            service.execute(Uuid::new_v4(), true).await,
            Err(MarkContactReadError::NotFound)
        ));
    }
}
