use crate::modules::contact::application::domain::entities::NewContactSubmission;
use crate::shared::validation::{self, FieldErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PHONE_MAX_CHARS: usize = 20;
pub const SUBJECT_MAX_CHARS: usize = 200;

/// Raw visitor input from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<NewContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = bounded(&mut errors, "name", &self.name, NAME_MAX_CHARS);

        let email = validation::valid_email(&mut errors, "email", &self.email)
            .filter(|email| {
                validation::within_max_length(&mut errors, "email", email, EMAIL_MAX_CHARS)
            });

        let phone = self.phone.trim().to_string();
        let phone_ok =
            validation::within_max_length(&mut errors, "phone", &phone, PHONE_MAX_CHARS);

        let subject = bounded(&mut errors, "subject", &self.subject, SUBJECT_MAX_CHARS);
        let message = validation::required(&mut errors, "message", &self.message);

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if phone_ok => {
                Ok(NewContactSubmission {
                    name,
                    email,
                    phone,
                    subject,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

fn bounded(errors: &mut FieldErrors, field: &str, value: &str, max: usize) -> Option<String> {
    let value = validation::required(errors, field, value)?;
    validation::within_max_length(errors, field, &value, max).then_some(value)
}
