use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/robots.txt",
    tag = "seo",
    responses(
        (status = 200, description = "Crawler rules", content_type = "text/plain", body = String)
    )
)]
#[get("/robots.txt")]
pub async fn robots_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(data.seo.robots.execute())
}
