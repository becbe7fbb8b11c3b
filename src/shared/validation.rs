use serde::Serialize;
use std::collections::BTreeMap;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Field name → messages, in the shape the public forms return them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn max_length_message(max: usize, actual: usize) -> String {
    format!("Ensure this value has at most {max} characters (it has {actual}).")
}

/// Trims `value` and records a required-field error when nothing is left.
pub fn required(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    Some(value.to_string())
}

/// Records a max-length error and returns false when `value` is too long.
pub fn within_max_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) -> bool {
    let len = char_len(value);
    if len > max {
        errors.add(field, max_length_message(max, len));
        return false;
    }
    true
}

pub fn valid_email(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let email = required(errors, field, value)?;
    if !email_address::EmailAddress::is_valid(&email) {
        errors.add(field, INVALID_EMAIL);
        return None;
    }
    Some(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_multiple_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");

        assert_eq!(errors.messages("name"), ["first", "second"]);
        assert!(errors.messages("email").is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("email", INVALID_EMAIL);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"][0], INVALID_EMAIL);
    }

    #[test]
    fn required_rejects_whitespace_only() {
        let mut errors = FieldErrors::new();

        assert_eq!(required(&mut errors, "subject", "   "), None);
        assert_eq!(errors.messages("subject"), [REQUIRED]);
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();

        assert!(within_max_length(&mut errors, "name", "ééé", 3));
        assert!(!within_max_length(&mut errors, "name", "éééé", 3));
        assert_eq!(
            errors.messages("name"),
            ["Ensure this value has at most 3 characters (it has 4)."]
        );
    }

    #[test]
    fn valid_email_trims_and_checks_syntax() {
        let mut errors = FieldErrors::new();

        assert_eq!(
            valid_email(&mut errors, "email", "  a@b.com "),
            Some("a@b.com".to_string())
        );
        assert_eq!(valid_email(&mut errors, "email", "not-an-email"), None);
        assert_eq!(errors.messages("email"), [INVALID_EMAIL]);
    }
}
