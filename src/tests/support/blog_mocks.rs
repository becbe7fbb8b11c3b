use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{
    BlogPost, BlogPostCard, Comment, CommentStatusFilter,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, CommentRepository, CommentRepositoryError, CommentWithCount,
    NewComment, PublishedPostRef,
};

mock! {
    pub BlogQueryMock {}
    #[async_trait]
    impl BlogQuery for BlogQueryMock {
        async fn find_published_by_slug(&self, slug: &str)
            -> Result<Option<BlogPost>, BlogQueryError>;
        async fn list_recent_published(&self, limit: u64)
            -> Result<Vec<BlogPostCard>, BlogQueryError>;
        async fn list_related_published(&self, exclude_post_id: Uuid, limit: u64)
            -> Result<Vec<BlogPostCard>, BlogQueryError>;
        async fn list_approved_comments(&self, post_id: Uuid)
            -> Result<Vec<Comment>, BlogQueryError>;
        async fn find_approved_comment(&self, post_id: Uuid, comment_id: Uuid)
            -> Result<Option<Comment>, BlogQueryError>;
        async fn list_published_for_sitemap(&self)
            -> Result<Vec<PublishedPostRef>, BlogQueryError>;
    }
}

mock! {
    pub CommentRepo {}
    #[async_trait]
    impl CommentRepository for CommentRepo {
        async fn record_submission(&self, comment: NewComment)
            -> Result<CommentWithCount, CommentRepositoryError>;
        async fn set_approval(&self, comment_id: Uuid, is_approved: bool)
            -> Result<CommentWithCount, CommentRepositoryError>;
        async fn list_comments(&self, status: CommentStatusFilter)
            -> Result<Vec<Comment>, CommentRepositoryError>;
    }
}

pub fn sample_post(slug: &str) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: Uuid::new_v4(),
        title: "Building a triage dashboard".to_string(),
        slug: slug.to_string(),
        author: "Admin".to_string(),
        image: "blog/cover.png".to_string(),
        excerpt: "Short excerpt".to_string(),
        content: "Body".to_string(),
        published_date: now,
        comments_count: 0,
        updated_at: now,
    }
}

pub fn sample_card(slug: &str) -> BlogPostCard {
    BlogPostCard::from(&sample_post(slug))
}

pub fn sample_comment(post_id: Uuid, parent_id: Option<Uuid>, approved: bool) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        post_id,
        parent_id,
        author_name: "Reader".to_string(),
        author_email: "reader@example.com".to_string(),
        content: "Great read".to_string(),
        is_approved: approved,
        created_at: Utc::now(),
    }
}
