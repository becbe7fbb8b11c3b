use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::blog_query_postgres::model_to_comment;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::blog::application::domain::entities::{Comment, CommentStatusFilter};
use crate::modules::blog::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CommentWithCount, NewComment,
};

/// Added to the approved count after a public submission, so the counter
/// includes the comment that was just created and is still pending.
const PENDING_SUBMISSION_BONUS: i32 = 1;

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Single-statement recount, so no other writer can slip between read and write.
    fn recount_stmt(post_id: Uuid, bonus: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE blog_posts
            SET comments_count = (
                SELECT COUNT(*)
                FROM comments c
                WHERE c.post_id = $1
                  AND c.is_approved = TRUE
            ) + $2
            WHERE id = $1
            RETURNING comments_count
            "#,
            vec![post_id.into(), bonus.into()],
        )
    }

    async fn recount<C>(conn: &C, post_id: Uuid, bonus: i32) -> Result<i32, CommentRepositoryError>
    where
        C: ConnectionTrait,
    {
        let row = conn
            .query_one(Self::recount_stmt(post_id, bonus))
            .await
            .map_err(map_db_err)?
            .ok_or(CommentRepositoryError::NotFound)?;

        row.try_get::<i32>("", "comments_count")
            .map_err(map_db_err)
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn record_submission(
        &self,
        new: NewComment,
    ) -> Result<CommentWithCount, CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let now = Utc::now().fixed_offset();
        let post_id = new.post_id;

        let inserted = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(post_id),
            parent_id: Set(new.parent_id),
            author_name: Set(new.author_name),
            author_email: Set(new.author_email),
            content: Set(new.content),
            is_approved: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await;

        let model = match inserted {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let comments_count =
            match Self::recount(&txn, post_id, PENDING_SUBMISSION_BONUS).await {
                Ok(n) => n,
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(e);
                }
            };

        txn.commit().await.map_err(map_db_err)?;

        Ok(CommentWithCount {
            comment: model_to_comment(model),
            comments_count,
        })
    }

    async fn set_approval(
        &self,
        comment_id: Uuid,
        is_approved: bool,
    ) -> Result<CommentWithCount, CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = match comments::Entity::find_by_id(comment_id).one(&txn).await {
            Ok(Some(m)) => m,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(CommentRepositoryError::NotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let mut active: comments::ActiveModel = existing.into();
        active.is_approved = Set(is_approved);

        let updated = match active.update(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let comments_count = match Self::recount(&txn, updated.post_id, 0).await {
            Ok(n) => n,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(CommentWithCount {
            comment: model_to_comment(updated),
            comments_count,
        })
    }

    async fn list_comments(
        &self,
        status: CommentStatusFilter,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut query = comments::Entity::find();

        query = match status {
            CommentStatusFilter::Pending => query.filter(comments::Column::IsApproved.eq(false)),
            CommentStatusFilter::Approved => query.filter(comments::Column::IsApproved.eq(true)),
            CommentStatusFilter::All => query,
        };

        let rows = query
            .order_by_desc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_comment).collect())
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
