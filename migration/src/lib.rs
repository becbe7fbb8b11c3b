pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_site_settings_table;
mod m20260301_000002_create_profile_tables;
mod m20260301_000003_create_portfolio_tables;
mod m20260301_000004_create_blog_posts_table;
mod m20260301_000005_create_comments_table;
mod m20260301_000006_create_contact_submissions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_site_settings_table::Migration),
            Box::new(m20260301_000002_create_profile_tables::Migration),
            Box::new(m20260301_000003_create_portfolio_tables::Migration),
            Box::new(m20260301_000004_create_blog_posts_table::Migration),
            Box::new(m20260301_000005_create_comments_table::Migration),
            Box::new(m20260301_000006_create_contact_submissions_table::Migration),
        ]
    }
}
