use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::entities::HomePage;
use crate::modules::content::application::ports::incoming::use_cases::GetHomePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Home page
///
/// Site settings, every active content collection and the six most recent posts.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Home page view model", body = inline(SuccessResponse<HomePage>)),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_home_page.execute().await {
        Ok(page) => ApiResponse::success(page),

        Err(GetHomePageError::RepositoryError(msg)) => {
            error!("Repository error building home page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
