mod get_home_page;
mod get_site_settings;
mod update_site_settings;

pub use get_home_page::{GetHomePageError, GetHomePageUseCase};
pub use get_site_settings::{GetSiteSettingsError, GetSiteSettingsUseCase};
pub use update_site_settings::{
    UpdateSiteSettingsCommand, UpdateSiteSettingsError, UpdateSiteSettingsUseCase,
};
