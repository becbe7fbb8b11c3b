use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::{blog_posts, comments};
use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostCard, Comment};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, PublishedPostRef,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn published() -> sea_orm::Select<blog_posts::Entity> {
        blog_posts::Entity::find().filter(blog_posts::Column::IsPublished.eq(true))
    }
}

#[derive(Debug, FromQueryResult)]
struct SitemapRow {
    slug: String,
    updated_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPost>, BlogQueryError> {
        let post = Self::published()
            .filter(blog_posts::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(post.map(model_to_post))
    }

    async fn list_recent_published(
        &self,
        limit: u64,
    ) -> Result<Vec<BlogPostCard>, BlogQueryError> {
        let posts = Self::published()
            .order_by_desc(blog_posts::Column::PublishedDate)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(posts.into_iter().map(model_to_card).collect())
    }

    async fn list_related_published(
        &self,
        exclude_post_id: Uuid,
        limit: u64,
    ) -> Result<Vec<BlogPostCard>, BlogQueryError> {
        let posts = Self::published()
            .filter(blog_posts::Column::Id.ne(exclude_post_id))
            .order_by_desc(blog_posts::Column::PublishedDate)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(posts.into_iter().map(model_to_card).collect())
    }

    async fn list_approved_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, BlogQueryError> {
        let rows = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .filter(comments::Column::IsApproved.eq(true))
            .order_by_asc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_comment).collect())
    }

    async fn find_approved_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, BlogQueryError> {
        let row = comments::Entity::find_by_id(comment_id)
            .filter(comments::Column::PostId.eq(post_id))
            .filter(comments::Column::IsApproved.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_comment))
    }

    async fn list_published_for_sitemap(&self) -> Result<Vec<PublishedPostRef>, BlogQueryError> {
        let rows = Self::published()
            .select_only()
            .column(blog_posts::Column::Slug)
            .column(blog_posts::Column::UpdatedAt)
            .order_by_desc(blog_posts::Column::PublishedDate)
            .into_model::<SitemapRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| PublishedPostRef {
                slug: r.slug,
                updated_at: r.updated_at.into(),
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_post(m: blog_posts::Model) -> BlogPost {
    BlogPost {
        id: m.id,
        title: m.title,
        slug: m.slug,
        author: m.author,
        image: m.image,
        excerpt: m.excerpt,
        content: m.content,
        published_date: m.published_date.into(),
        comments_count: m.comments_count,
        updated_at: m.updated_at.into(),
    }
}

fn model_to_card(m: blog_posts::Model) -> BlogPostCard {
    BlogPostCard {
        id: m.id,
        title: m.title,
        slug: m.slug,
        author: m.author,
        image: m.image,
        excerpt: m.excerpt,
        published_date: m.published_date.into(),
        comments_count: m.comments_count,
    }
}

pub(crate) fn model_to_comment(m: comments::Model) -> Comment {
    Comment {
        id: m.id,
        post_id: m.post_id,
        parent_id: m.parent_id,
        author_name: m.author_name,
        author_email: m.author_email,
        content: m.content,
        is_approved: m.is_approved,
        created_at: m.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};
    use std::collections::BTreeMap;

    fn post_model(slug: &str) -> blog_posts::Model {
        let now = Utc::now().fixed_offset();
        blog_posts::Model {
            id: Uuid::new_v4(),
            title: "Post".to_string(),
            slug: slug.to_string(),
            author: "Admin".to_string(),
            image: "blog/cover.png".to_string(),
            excerpt: "Excerpt".to_string(),
            content: "Body".to_string(),
            published_date: now,
            comments_count: 2,
            is_published: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn comment_model(post_id: Uuid, parent_id: Option<Uuid>) -> comments::Model {
        let now = Utc::now().fixed_offset();
        comments::Model {
            id: Uuid::new_v4(),
            post_id,
            parent_id,
            author_name: "Reader".to_string(),
            author_email: "reader@example.com".to_string(),
            content: "Great read".to_string(),
            is_approved: true,
            created_at: now,
            updated_at: now,
        }
    }

    // ========================================================================
    // Posts
    // ========================================================================

    #[tokio::test]
    async fn test_find_published_by_slug_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("hello-world")]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let post = query.find_published_by_slug("hello-world").await.unwrap();

        let post = post.expect("post should be found");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.comments_count, 2);
    }

    #[tokio::test]
    async fn test_find_published_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));

        assert!(query
            .find_published_by_slug("unknown-slug")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_published_by_slug_matches_exact_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();
        let db = Arc::new(db);

        let query = BlogQueryPostgres::new(Arc::clone(&db));
        let _ = query.find_published_by_slug("Hello").await;
        drop(query);

        let conn = Arc::try_unwrap(db).expect("single owner");
        let log = conn.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(!sql.contains("LOWER"));
        assert!(sql.contains("is_published"));
        assert!(sql.contains(r#"String(Some("Hello"))"#));
    }

    #[tokio::test]
    async fn test_list_recent_published_maps_cards() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("b"), post_model("a")]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let cards = query.list_recent_published(6).await.unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].slug, "b");
    }

    #[tokio::test]
    async fn test_list_published_for_sitemap_projects_slug_and_updated_at() {
        let updated = (Utc::now() - Duration::days(3)).fixed_offset();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([
                (
                    "slug".to_string(),
                    Value::String(Some(Box::new("hello-world".to_string()))),
                ),
                (
                    "updated_at".to_string(),
                    Value::ChronoDateTimeWithTimeZone(Some(Box::new(updated))),
                ),
            ])]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let refs = query.list_published_for_sitemap().await.unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].slug, "hello-world");
        assert_eq!(refs[0].updated_at, updated.with_timezone(&Utc));
    }

    // ========================================================================
    // Comments
    // ========================================================================

    #[tokio::test]
    async fn test_list_approved_comments() {
        let post_id = Uuid::new_v4();
        let top = comment_model(post_id, None);
        let reply = comment_model(post_id, Some(top.id));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![top.clone(), reply]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let comments = query.list_approved_comments(post_id).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].parent_id, Some(top.id));
    }

    #[tokio::test]
    async fn test_find_approved_comment_none_when_not_on_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<comments::Model>::new()])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let found = query
            .find_approved_comment(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_db_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let result = query.list_recent_published(6).await;

        assert!(matches!(result, Err(BlogQueryError::DatabaseError(_))));
    }
}
