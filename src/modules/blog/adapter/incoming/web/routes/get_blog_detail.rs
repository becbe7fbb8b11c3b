use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::entities::BlogDetail;
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogDetailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Blog post detail
///
/// The published post, its approved comment threads and up to three related posts.
#[utoipa::path(
    get,
    path = "/blog/{slug}/",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Post slug, matched exactly")
    ),
    responses(
        (status = 200, description = "Blog detail view model", body = inline(SuccessResponse<BlogDetail>)),
        (status = 404, description = "Unknown or unpublished post", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/blog/{slug}/")]
pub async fn get_blog_detail_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get_detail.execute(&slug).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetBlogDetailError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(GetBlogDetailError::RepositoryError(msg)) => {
            error!("Repository error loading post '{}': {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::blog::application::domain::entities::{
        build_threads, BlogPostCard,
    };
    use crate::modules::blog::application::ports::incoming::use_cases::GetBlogDetailUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::blog_mocks::{sample_card, sample_comment, sample_post};

    #[derive(Clone)]
    struct MockGetBlogDetailUseCase {
        result: Result<BlogDetail, GetBlogDetailError>,
    }

    #[async_trait]
    impl GetBlogDetailUseCase for MockGetBlogDetailUseCase {
        async fn execute(&self, _slug: &str) -> Result<BlogDetail, GetBlogDetailError> {
            self.result.clone()
        }
    }

    fn detail() -> BlogDetail {
        let post = sample_post("triage-dashboard");
        let root = sample_comment(post.id, None, true);
        let reply = sample_comment(post.id, Some(root.id), true);
        let related: Vec<BlogPostCard> = vec![sample_card("older-post")];

        BlogDetail {
            comments: build_threads(vec![root, reply]),
            post,
            related_posts: related,
        }
    }

    /* --------------------------------------------------
     * Success
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_blog_detail_success() {
        // Arrange
        let app_state = TestAppStateBuilder::default()
            .with_get_blog_detail(MockGetBlogDetailUseCase {
                result: Ok(detail()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_blog_detail_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/blog/triage-dashboard/")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["post"]["slug"], "triage-dashboard");
        assert_eq!(body["data"]["comments"][0]["replies"].as_array().unwrap().len(), 1);
        assert!(
            body["data"]["comments"][0]["comment"]
                .get("author_email")
                .is_none(),
            "public threads never expose email addresses"
        );
        assert_eq!(body["data"]["related_posts"][0]["slug"], "older-post");
    }

    /* --------------------------------------------------
     * Not found
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_blog_detail_unknown_slug() {
        let app_state = TestAppStateBuilder::default()
            .with_get_blog_detail(MockGetBlogDetailUseCase {
                result: Err(GetBlogDetailError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_blog_detail_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/blog/unknown-slug/")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_blog_detail_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_blog_detail(MockGetBlogDetailUseCase {
                result: Err(GetBlogDetailError::RepositoryError("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_blog_detail_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/blog/anything/")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
