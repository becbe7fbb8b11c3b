use async_trait::async_trait;

use crate::modules::content::application::domain::entities::SiteSettings;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetSiteSettingsError, GetSiteSettingsUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    SiteSettingsRepository, SiteSettingsRepositoryError,
};

pub struct GetSiteSettingsService<S>
where
    S: SiteSettingsRepository,
{
    settings: S,
}

impl<S> GetSiteSettingsService<S>
where
    S: SiteSettingsRepository,
{
    pub fn new(settings: S) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl<S> GetSiteSettingsUseCase for GetSiteSettingsService<S>
where
    S: SiteSettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError> {
        self.settings.get_or_create().await.map_err(|e| match e {
            SiteSettingsRepositoryError::DatabaseError(msg) => {
                GetSiteSettingsError::RepositoryError(msg)
            }
        })
    }
}
