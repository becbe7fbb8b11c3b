mod get_home_page_service;
mod get_site_settings_service;
mod update_site_settings_service;

pub use get_home_page_service::GetHomePageService;
pub use get_site_settings_service::GetSiteSettingsService;
pub use update_site_settings_service::UpdateSiteSettingsService;
