use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_submissions;
use crate::modules::contact::application::domain::entities::{
    ContactSubmission, NewContactSubmission,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let model = contact_submissions::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(submission.name),
            email: Set(submission.email),
            phone: Set(submission.phone),
            subject: Set(submission.subject),
            message: Set(submission.message),
            is_read: Set(false),
            submitted_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError> {
        let rows = contact_submissions::Entity::find()
            .order_by_desc(contact_submissions::Column::SubmittedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn set_read(
        &self,
        id: Uuid,
        is_read: bool,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let updated = contact_submissions::Entity::update_many()
            .col_expr(contact_submissions::Column::IsRead, Expr::value(is_read))
            .filter(contact_submissions::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(ContactRepositoryError::NotFound)
    }
}

impl From<contact_submissions::Model> for ContactSubmission {
    fn from(m: contact_submissions::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.message,
            is_read: m.is_read,
            submitted_at: m.submitted_at.into(),
        }
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    fn model(is_read: bool) -> contact_submissions::Model {
        contact_submissions::Model {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            subject: "Collaboration".to_string(),
            message: "Would love to talk.".to_string(),
            is_read,
            submitted_at: Utc::now().fixed_offset(),
        }
    }

    fn new_submission() -> NewContactSubmission {
        NewContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            subject: "Collaboration".to_string(),
            message: "Would love to talk.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_unread_submission() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(false)]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let saved = repo.create(new_submission()).await.unwrap();

        assert_eq!(saved.subject, "Collaboration");
        assert!(!saved.is_read);
    }

    #[tokio::test]
    async fn test_create_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "disk full".to_string(),
            ))])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(new_submission()).await;

        assert!(matches!(
            result,
            Err(ContactRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(false), model(true)]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let rows = repo.list().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[1].is_read);
    }

    #[tokio::test]
    async fn test_set_read_returns_updated_row() {
        let row = model(true);
        let id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let updated = repo.set_read(id, true).await.unwrap();

        assert_eq!(updated.id, id);
        assert!(updated.is_read);
    }

    #[tokio::test]
    async fn test_set_read_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<contact_submissions::Model>::new()])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo.set_read(Uuid::new_v4(), true).await;

        assert!(matches!(result, Err(ContactRepositoryError::NotFound)));
    }
}
