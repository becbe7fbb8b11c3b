use actix_web::web;

use crate::admin::adapter::incoming::web::extractors::AdminApiToken;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn admin_token_data() -> web::Data<AdminApiToken> {
    web::Data::new(AdminApiToken::new(TEST_ADMIN_TOKEN))
}

/// Header pair for `TestRequest::insert_header`.
pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
}
