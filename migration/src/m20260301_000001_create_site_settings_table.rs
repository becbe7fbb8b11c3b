use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Shared updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;
                "#,
            )
            .await?;

        // =====================================================
        // Create site_settings table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .small_integer()
                            .not_null()
                            .primary_key()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::HeroGreeting)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::HeroName).string_len(100).not_null())
                    .col(ColumnDef::new(SiteSettings::HeroTitle).string_len(200).not_null())
                    .col(ColumnDef::new(SiteSettings::HeroDescription).text().not_null())
                    .col(ColumnDef::new(SiteSettings::HeroImage).text())
                    .col(ColumnDef::new(SiteSettings::AboutTitle).string_len(200).not_null())
                    .col(ColumnDef::new(SiteSettings::AboutDescription).text().not_null())
                    .col(ColumnDef::new(SiteSettings::AboutImage).text())
                    .col(ColumnDef::new(SiteSettings::Logo).text())
                    .col(ColumnDef::new(SiteSettings::Favicon).text())
                    .col(ColumnDef::new(SiteSettings::FooterText).string_len(200).not_null())
                    .col(
                        ColumnDef::new(SiteSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(SiteSettings::Id).eq(1))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_site_settings_updated_at
                BEFORE UPDATE ON site_settings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_site_settings_updated_at ON site_settings;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    HeroGreeting,
    HeroName,
    HeroTitle,
    HeroDescription,
    HeroImage,
    AboutTitle,
    AboutDescription,
    AboutImage,
    Logo,
    Favicon,
    FooterText,
    CreatedAt,
    UpdatedAt,
}
