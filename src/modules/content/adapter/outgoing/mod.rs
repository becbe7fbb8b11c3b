mod content_query_postgres;
pub mod sea_orm_entity;
mod site_settings_repository_postgres;

pub use content_query_postgres::ContentQueryPostgres;
pub use site_settings_repository_postgres::SiteSettingsRepositoryPostgres;
