use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::SiteSettings;
use crate::shared::validation::{self, FieldErrors};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Full replacement of the settings record. Empty image strings clear the image.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSiteSettingsCommand {
    pub hero_greeting: String,
    pub hero_name: String,
    pub hero_title: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub hero_image: Option<String>,
    pub about_title: String,
    #[serde(default)]
    pub about_description: String,
    #[serde(default)]
    pub about_image: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    pub footer_text: String,
}

impl UpdateSiteSettingsCommand {
    /// Checks column widths and required fields, returning the normalized record.
    pub fn validate(self) -> Result<SiteSettings, FieldErrors> {
        let mut errors = FieldErrors::new();

        let hero_greeting = bounded(&mut errors, "hero_greeting", &self.hero_greeting, 100);
        let hero_name = bounded(&mut errors, "hero_name", &self.hero_name, 100);
        let hero_title = bounded(&mut errors, "hero_title", &self.hero_title, 200);
        let about_title = bounded(&mut errors, "about_title", &self.about_title, 200);
        let footer_text = bounded(&mut errors, "footer_text", &self.footer_text, 200);

        match (hero_greeting, hero_name, hero_title, about_title, footer_text) {
            (Some(hero_greeting), Some(hero_name), Some(hero_title), Some(about_title), Some(footer_text))
                if errors.is_empty() =>
            {
                Ok(SiteSettings {
                    hero_greeting,
                    hero_name,
                    hero_title,
                    hero_description: self.hero_description.trim().to_string(),
                    hero_image: file_ref(self.hero_image),
                    about_title,
                    about_description: self.about_description.trim().to_string(),
                    about_image: file_ref(self.about_image),
                    logo: file_ref(self.logo),
                    favicon: file_ref(self.favicon),
                    footer_text,
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

fn file_ref(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSiteSettingsError {
    #[error("Validation failed")]
    Invalid(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateSiteSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateSiteSettingsCommand,
    ) -> Result<SiteSettings, UpdateSiteSettingsError>;
}
