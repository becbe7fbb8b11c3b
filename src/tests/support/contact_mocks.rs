use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactSubmission, NewContactSubmission,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

mock! {
    pub ContactRepo {}
    #[async_trait]
    impl ContactRepository for ContactRepo {
        async fn create(&self, submission: NewContactSubmission)
            -> Result<ContactSubmission, ContactRepositoryError>;
        async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError>;
        async fn set_read(&self, id: Uuid, is_read: bool)
            -> Result<ContactSubmission, ContactRepositoryError>;
    }
}

pub fn sample_submission(is_read: bool) -> ContactSubmission {
    ContactSubmission {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: String::new(),
        subject: "Collaboration".to_string(),
        message: "Would love to talk.".to_string(),
        is_read,
        submitted_at: Utc::now(),
    }
}
