use actix_web::{get, patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::admin::adapter::incoming::web::extractors::AdminUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsError, MarkContactReadError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkContactReadRequest {
    pub is_read: bool,
}

#[utoipa::path(
    get,
    path = "/admin/api/contact-submissions",
    tag = "admin",
    security(("AdminToken" = [])),
    responses(
        (status = 200, description = "Submissions, newest first", body = inline(SuccessResponse<Vec<ContactSubmission>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/admin/api/contact-submissions")]
pub async fn list_contact_submissions_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),

        Err(ListContactSubmissionsError::RepositoryError(msg)) => {
            error!("Repository error listing contact submissions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Toggles the read flag only.
#[utoipa::path(
    patch,
    path = "/admin/api/contact-submissions/{id}",
    tag = "admin",
    security(("AdminToken" = [])),
    params(
        ("id" = Uuid, Path, description = "Submission id")
    ),
    request_body = MarkContactReadRequest,
    responses(
        (status = 200, description = "Updated submission", body = inline(SuccessResponse<ContactSubmission>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown submission", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[patch("/admin/api/contact-submissions/{id}")]
pub async fn mark_contact_read_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<MarkContactReadRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.mark_read.execute(id, body.is_read).await {
        Ok(submission) => ApiResponse::success(submission),

        Err(MarkContactReadError::NotFound) => ApiResponse::not_found(
            "CONTACT_SUBMISSION_NOT_FOUND",
            "Contact submission not found",
        ),

        Err(MarkContactReadError::RepositoryError(msg)) => {
            error!("Repository error updating contact submission {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
