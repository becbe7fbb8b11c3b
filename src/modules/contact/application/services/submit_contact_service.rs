use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::contact_form::ContactForm;
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<ContactSubmission, SubmitContactError> {
        let submission = form.validate().map_err(SubmitContactError::Invalid)?;

        let saved = self
            .repository
            .create(submission)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => {
                    SubmitContactError::RepositoryError("insert returned no row".to_string())
                }
                ContactRepositoryError::DatabaseError(msg) => {
                    SubmitContactError::RepositoryError(msg)
                }
            })?;

        info!("Contact submission {} stored", saved.id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::contact_mocks::{sample_submission, MockContactRepo};

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk.".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_valid_submission_unread() {
        let mut repo = MockContactRepo::new();
        repo.expect_create()
            .withf(|s| s.name == "Jane" && s.phone == "+1 555 0100")
            .times(1)
            .returning(|s| {
                let mut saved = sample_submission(false);
                saved.name = s.name;
                Ok(saved)
            });

        let service = SubmitContactService::new(repo);
        let saved = service.execute(form()).await.unwrap();

        assert_eq!(saved.name, "Jane");
        assert!(!saved.is_read);
    }

    #[tokio::test]
    async fn invalid_form_is_not_persisted() {
        let mut repo = MockContactRepo::new();
        repo.expect_create().times(0);

        let mut bad = form();
        bad.subject = "   ".to_string();

        let service = SubmitContactService::new(repo);
        let result = service.execute(bad).await;

        assert!(matches!(
            result,
            Err(SubmitContactError::Invalid(errors)) if errors.contains("subject")
        ));
    }

    #[tokio::test]
    async fn maps_database_error() {
        let mut repo = MockContactRepo::new();
        repo.expect_create().returning(|_| {
            Err(ContactRepositoryError::DatabaseError(
                "connection reset".to_string(),
            ))
        });

        let service = SubmitContactService::new(repo);
        let result = service.execute(form()).await;

        assert!(matches!(
            result,
            Err(SubmitContactError::RepositoryError(msg)) if msg == "connection reset"
        ));
    }
}
