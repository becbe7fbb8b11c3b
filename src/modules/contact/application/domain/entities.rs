use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored contact-form message. Append-only apart from the read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Free text, empty when not given.
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
