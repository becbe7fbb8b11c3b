use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::entities::SiteSettings;
use crate::modules::content::application::ports::incoming::use_cases::{
    UpdateSiteSettingsCommand, UpdateSiteSettingsError, UpdateSiteSettingsUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    SiteSettingsRepository, SiteSettingsRepositoryError,
};

pub struct UpdateSiteSettingsService<S>
where
    S: SiteSettingsRepository,
{
    settings: S,
}

impl<S> UpdateSiteSettingsService<S>
where
    S: SiteSettingsRepository,
{
    pub fn new(settings: S) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl<S> UpdateSiteSettingsUseCase for UpdateSiteSettingsService<S>
where
    S: SiteSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateSiteSettingsCommand,
    ) -> Result<SiteSettings, UpdateSiteSettingsError> {
        let settings = command
            .validate()
            .map_err(UpdateSiteSettingsError::Invalid)?;

        let saved = self.settings.save(settings).await.map_err(|e| match e {
            SiteSettingsRepositoryError::DatabaseError(msg) => {
                UpdateSiteSettingsError::RepositoryError(msg)
            }
        })?;

        info!("Site settings updated");
        Ok(saved)
    }
}
