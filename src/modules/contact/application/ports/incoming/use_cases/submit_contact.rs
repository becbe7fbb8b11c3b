use async_trait::async_trait;

use crate::modules::contact::application::domain::contact_form::ContactForm;
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::shared::validation::FieldErrors;

pub const CONTACT_ACCEPTED_MESSAGE: &str =
    "Thank you for your message! I will get back to you soon.";

// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Validation failed")]
    Invalid(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactSubmission, SubmitContactError>;
}
