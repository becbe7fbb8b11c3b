use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, Statement, Value,
};
use std::sync::Arc;
use tracing::info;

use crate::modules::content::adapter::outgoing::sea_orm_entity::site_settings::{self, Entity};
use crate::modules::content::application::domain::entities::SiteSettings;
use crate::modules::content::application::ports::outgoing::{
    SiteSettingsRepository, SiteSettingsRepositoryError,
};

const INSERT_DEFAULTS_SQL: &str = r#"
    INSERT INTO site_settings (
        id, hero_greeting, hero_name, hero_title, hero_description, hero_image,
        about_title, about_description, about_image, logo, favicon, footer_text
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
    ON CONFLICT (id) DO NOTHING
"#;

const UPSERT_SQL: &str = r#"
    INSERT INTO site_settings (
        id, hero_greeting, hero_name, hero_title, hero_description, hero_image,
        about_title, about_description, about_image, logo, favicon, footer_text
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
    ON CONFLICT (id) DO UPDATE SET
        hero_greeting = EXCLUDED.hero_greeting,
        hero_name = EXCLUDED.hero_name,
        hero_title = EXCLUDED.hero_title,
        hero_description = EXCLUDED.hero_description,
        hero_image = EXCLUDED.hero_image,
        about_title = EXCLUDED.about_title,
        about_description = EXCLUDED.about_description,
        about_image = EXCLUDED.about_image,
        logo = EXCLUDED.logo,
        favicon = EXCLUDED.favicon,
        footer_text = EXCLUDED.footer_text
    RETURNING *
"#;

#[derive(Debug, Clone)]
pub struct SiteSettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteSettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_singleton(&self) -> Result<Option<site_settings::Model>, DbErr> {
        Entity::find_by_id(SiteSettings::SINGLETON_ID)
            .one(&*self.db)
            .await
    }
}

#[async_trait]
impl SiteSettingsRepository for SiteSettingsRepositoryPostgres {
    async fn get_or_create(&self) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        if let Some(model) = self.find_singleton().await.map_err(map_db_err)? {
            return Ok(model.into());
        }

        // Concurrent first requests may race here; the loser's insert is a no-op.
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INSERT_DEFAULTS_SQL,
                row_values(SiteSettings::default()),
            ))
            .await
            .map_err(map_db_err)?;

        info!("Created default site settings");

        self.find_singleton()
            .await
            .map_err(map_db_err)?
            .map(SiteSettings::from)
            .ok_or_else(|| {
                SiteSettingsRepositoryError::DatabaseError(
                    "site settings row missing after insert".to_string(),
                )
            })
    }

    async fn save(
        &self,
        settings: SiteSettings,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPSERT_SQL,
            row_values(settings),
        );

        Entity::find()
            .from_raw_sql(stmt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(SiteSettings::from)
            .ok_or_else(|| {
                SiteSettingsRepositoryError::DatabaseError(
                    "upsert returned no row".to_string(),
                )
            })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn row_values(s: SiteSettings) -> Vec<Value> {
    vec![
        SiteSettings::SINGLETON_ID.into(),
        s.hero_greeting.into(),
        s.hero_name.into(),
        s.hero_title.into(),
        s.hero_description.into(),
        s.hero_image.into(),
        s.about_title.into(),
        s.about_description.into(),
        s.about_image.into(),
        s.logo.into(),
        s.favicon.into(),
        s.footer_text.into(),
    ]
}

impl From<site_settings::Model> for SiteSettings {
    fn from(m: site_settings::Model) -> Self {
        SiteSettings {
            hero_greeting: m.hero_greeting,
            hero_name: m.hero_name,
            hero_title: m.hero_title,
            hero_description: m.hero_description,
            hero_image: m.hero_image,
            about_title: m.about_title,
            about_description: m.about_description,
            about_image: m.about_image,
            logo: m.logo,
            favicon: m.favicon,
            footer_text: m.footer_text,
        }
    }
}

fn map_db_err(e: DbErr) -> SiteSettingsRepositoryError {
    SiteSettingsRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
