use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Public forms and admin payloads are small; anything larger is rejected early.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, req| {
            let message = err.to_string();
            tracing::warn!("Rejected JSON body on {}: {}", req.path(), message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("MALFORMED_BODY", &message),
            )
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        flag: bool,
    }

    #[post("/echo")]
    async fn echo(_payload: web::Json<Payload>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_json_maps_to_api_error_shape() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "MALFORMED_BODY");
    }
}
