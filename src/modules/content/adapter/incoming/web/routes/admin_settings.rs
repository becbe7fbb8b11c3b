use actix_web::{get, put, web, Responder};
use tracing::error;

use crate::admin::adapter::incoming::web::extractors::AdminUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::entities::SiteSettings;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetSiteSettingsError, UpdateSiteSettingsCommand, UpdateSiteSettingsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/admin/api/settings",
    tag = "admin",
    security(("AdminToken" = [])),
    responses(
        (status = 200, description = "Current site settings", body = inline(SuccessResponse<SiteSettings>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/admin/api/settings")]
pub async fn get_settings_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.content.get_settings.execute().await {
        Ok(settings) => ApiResponse::success(settings),

        Err(GetSiteSettingsError::RepositoryError(msg)) => {
            error!("Repository error loading site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Replaces the singleton in place. No create or delete route exists.
#[utoipa::path(
    put,
    path = "/admin/api/settings",
    tag = "admin",
    security(("AdminToken" = [])),
    request_body = UpdateSiteSettingsCommand,
    responses(
        (status = 200, description = "Saved site settings", body = inline(SuccessResponse<SiteSettings>)),
        (status = 400, description = "Field errors", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[put("/admin/api/settings")]
pub async fn update_settings_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<UpdateSiteSettingsCommand>,
) -> impl Responder {
    match data.content.update_settings.execute(body.into_inner()).await {
        Ok(settings) => ApiResponse::success(settings),

        Err(UpdateSiteSettingsError::Invalid(errors)) => ApiResponse::validation_error(errors),

        Err(UpdateSiteSettingsError::RepositoryError(msg)) => {
            error!("Repository error saving site settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
