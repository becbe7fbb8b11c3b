use actix_web::{http::StatusCode, post, web, Either, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::FormAckResponse;
use crate::modules::blog::application::domain::comment_form::CommentSubmission;
use crate::modules::blog::application::ports::incoming::use_cases::{
    SubmitCommentError, COMMENT_ACCEPTED_MESSAGE, SPAM_REJECTED_MESSAGE,
};
use crate::shared::api::FormResponse;
use crate::AppState;

/// Comment form as posted by the page, either JSON or urlencoded.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommentFormDto {
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    /// Id of an approved comment on the same post. Anything else is ignored.
    pub parent_id: Option<String>,
    /// Leave empty.
    pub website: String,
}

impl From<CommentFormDto> for CommentSubmission {
    fn from(dto: CommentFormDto) -> Self {
        Self {
            author_name: dto.author_name,
            author_email: dto.author_email,
            content: dto.content,
            parent_id: dto
                .parent_id
                .as_deref()
                .and_then(|raw| Uuid::parse_str(raw.trim()).ok()),
            website: dto.website,
        }
    }
}

/// Submit a comment
///
/// The comment is stored unapproved and only shown after moderation.
#[utoipa::path(
    post,
    path = "/blog/{slug}/comment/",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    request_body(
        content = CommentFormDto,
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Accepted for moderation", body = FormAckResponse),
        (status = 400, description = "Field errors or rejected submission", body = FormAckResponse),
        (status = 404, description = "Unknown or unpublished post", body = FormAckResponse),
        (status = 500, description = "Storage failure", body = FormAckResponse)
    )
)]
#[post("/blog/{slug}/comment/")]
pub async fn submit_comment_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Either<web::Json<CommentFormDto>, web::Form<CommentFormDto>>,
) -> impl Responder {
    let slug = path.into_inner();
    let form = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    match data.blog.submit_comment.execute(&slug, form.into()).await {
        Ok(_) => FormResponse::accepted(COMMENT_ACCEPTED_MESSAGE),

        Err(SubmitCommentError::Spam) => {
            FormResponse::failure(StatusCode::BAD_REQUEST, SPAM_REJECTED_MESSAGE)
        }

        Err(SubmitCommentError::Invalid(errors)) => FormResponse::invalid(errors),

        Err(SubmitCommentError::PostNotFound) => {
            FormResponse::failure(StatusCode::NOT_FOUND, "Post not found.")
        }

        Err(SubmitCommentError::RepositoryError(msg)) => {
            error!("Repository error storing comment on '{}': {}", slug, msg);
            FormResponse::internal_error()
        }
    }
}
