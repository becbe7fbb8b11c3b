use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostCard, Comment};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Minimal published-post projection for sitemap generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPostRef {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side; published posts and approved comments only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogQuery: Send + Sync {
    async fn find_published_by_slug(&self, slug: &str)
        -> Result<Option<BlogPost>, BlogQueryError>;

    /// Newest first by `published_date`.
    async fn list_recent_published(&self, limit: u64)
        -> Result<Vec<BlogPostCard>, BlogQueryError>;

    /// Newest first, never including `exclude_post_id`.
    async fn list_related_published(
        &self,
        exclude_post_id: Uuid,
        limit: u64,
    ) -> Result<Vec<BlogPostCard>, BlogQueryError>;

    /// Approved comments of a post, oldest first.
    async fn list_approved_comments(&self, post_id: Uuid)
        -> Result<Vec<Comment>, BlogQueryError>;

    /// An approved comment that belongs to `post_id`.
    async fn find_approved_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, BlogQueryError>;

    async fn list_published_for_sitemap(&self)
        -> Result<Vec<PublishedPostRef>, BlogQueryError>;
}
