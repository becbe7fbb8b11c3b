use async_trait::async_trait;

use crate::modules::content::application::domain::entities::SiteSettings;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteSettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    /// Returns the singleton row, inserting the built-in defaults first if it is missing.
    async fn get_or_create(&self) -> Result<SiteSettings, SiteSettingsRepositoryError>;

    /// Overwrites the singleton row in place.
    async fn save(&self, settings: SiteSettings)
        -> Result<SiteSettings, SiteSettingsRepositoryError>;
}
