use actix_web::{post, web, Either, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::FormAckResponse;
use crate::modules::contact::application::domain::contact_form::ContactForm;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, CONTACT_ACCEPTED_MESSAGE,
};
use crate::shared::api::FormResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactFormDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactFormDto> for ContactForm {
    fn from(dto: ContactFormDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            subject: dto.subject,
            message: dto.message,
        }
    }
}

/// Send a contact message
#[utoipa::path(
    post,
    path = "/contact/",
    tag = "contact",
    request_body(
        content = ContactFormDto,
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Message stored", body = FormAckResponse),
        (status = 400, description = "Field errors", body = FormAckResponse),
        (status = 500, description = "Storage failure", body = FormAckResponse)
    )
)]
#[post("/contact/")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    body: Either<web::Json<ContactFormDto>, web::Form<ContactFormDto>>,
) -> impl Responder {
    let form = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    match data.contact.submit.execute(form.into()).await {
        Ok(_) => FormResponse::accepted(CONTACT_ACCEPTED_MESSAGE),

        Err(SubmitContactError::Invalid(errors)) => FormResponse::invalid(errors),

        Err(SubmitContactError::RepositoryError(msg)) => {
            error!("Repository error storing contact submission: {}", msg);
            FormResponse::internal_error()
        }
    }
}
