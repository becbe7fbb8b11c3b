pub mod content_query;
pub mod site_settings_repository;

pub use content_query::{ContentQuery, ContentQueryError};
pub use site_settings_repository::{SiteSettingsRepository, SiteSettingsRepositoryError};
