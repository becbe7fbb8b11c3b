use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{build_threads, BlogDetail};
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogDetailError, GetBlogDetailUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogQueryError};

pub const RELATED_POSTS: u64 = 3;

pub struct GetBlogDetailService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogDetailService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_err(e: BlogQueryError) -> GetBlogDetailError {
    match e {
        BlogQueryError::DatabaseError(msg) => GetBlogDetailError::RepositoryError(msg),
    }
}

#[async_trait]
impl<Q> GetBlogDetailUseCase for GetBlogDetailService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogDetail, GetBlogDetailError> {
        let post = self
            .query
            .find_published_by_slug(slug)
            .await
            .map_err(query_err)?
            .ok_or(GetBlogDetailError::NotFound)?;

        let comments = self
            .query
            .list_approved_comments(post.id)
            .await
            .map_err(query_err)?;

        let related_posts = self
            .query
            .list_related_published(post.id, RELATED_POSTS)
            .await
            .map_err(query_err)?;

        Ok(BlogDetail {
            post,
            comments: build_threads(comments),
            related_posts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;

    use crate::tests::support::blog_mocks::{
        sample_card, sample_comment, sample_post, MockBlogQueryMock,
    };

    #[tokio::test]
    async fn execute_builds_threads_and_related_posts() {
        // Arrange
        let post = sample_post("triage");
        let post_id = post.id;
        let top = sample_comment(post_id, None, true);
        let reply = sample_comment(post_id, Some(top.id), true);

        let mut query = MockBlogQueryMock::new();
        query
            .expect_find_published_by_slug()
            .with(eq("triage"))
            .returning(move |_| Ok(Some(post.clone())));
        let comments = vec![top.clone(), reply.clone()];
        query
            .expect_list_approved_comments()
            .with(eq(post_id))
            .returning(move |_| Ok(comments.clone()));
        query
            .expect_list_related_published()
            .with(eq(post_id), eq(RELATED_POSTS))
            .returning(|_, _| Ok(vec![sample_card("other")]));

        let service = GetBlogDetailService::new(query);

        // Act
        let detail = service.execute("triage").await.unwrap();

        // Assert
        assert_eq!(detail.post.slug, "triage");
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].comment.id, top.id);
        assert_eq!(detail.comments[0].replies[0].id, reply.id);
        assert_eq!(detail.related_posts[0].slug, "other");
    }

    #[tokio::test]
    async fn execute_returns_not_found_for_unknown_slug() {
        let mut query = MockBlogQueryMock::new();
        query
            .expect_find_published_by_slug()
            .returning(|_| Ok(None));
        query.expect_list_approved_comments().times(0);

        let service = GetBlogDetailService::new(query);
        let result = service.execute("unknown-slug").await;

        assert!(matches!(result, Err(GetBlogDetailError::NotFound)));
    }

    #[tokio::test]
    async fn execute_maps_database_error() {
        let mut query = MockBlogQueryMock::new();
        query
            .expect_find_published_by_slug()
            .returning(|_| Err(BlogQueryError::DatabaseError("db down".to_string())));

        let service = GetBlogDetailService::new(query);
        let result = service.execute("triage").await;

        assert!(matches!(
            result,
            Err(GetBlogDetailError::RepositoryError(msg)) if msg == "db down"
        ));
    }
}
