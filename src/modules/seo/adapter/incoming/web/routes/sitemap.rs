use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::seo::application::ports::incoming::use_cases::GetSitemapError;
use crate::AppState;

/// Search engines tolerate a day of staleness.
pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=86400";

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = "seo",
    responses(
        (status = 200, description = "XML sitemap", content_type = "application/xml", body = String),
        (status = 500, description = "Storage failure")
    )
)]
#[get("/sitemap.xml")]
pub async fn sitemap_handler(data: web::Data<AppState>) -> impl Responder {
    match data.seo.sitemap.execute().await {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml")
            .insert_header((header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL))
            .body(xml),

        Err(GetSitemapError::RepositoryError(msg)) => {
            error!("Repository error building sitemap: {}", msg);
            HttpResponse::InternalServerError().finish()
        }
    }
}
