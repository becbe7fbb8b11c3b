use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetHomePageUseCase, GetSiteSettingsUseCase, UpdateSiteSettingsUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_home_page: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub get_settings: Arc<dyn GetSiteSettingsUseCase + Send + Sync>,
    pub update_settings: Arc<dyn UpdateSiteSettingsUseCase + Send + Sync>,
}
