use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // services
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid_pk(Services::Id))
                    .col(ColumnDef::new(Services::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).text())
                    .col(order_col(Services::Order))
                    .col(is_active_col(Services::IsActive))
                    .col(timestamp_col(Services::CreatedAt))
                    .col(timestamp_col(Services::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(uuid_pk(Education::Id))
                    .col(ColumnDef::new(Education::Degree).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Education::Subtitle)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::StartDate).date().not_null())
                    .col(ColumnDef::new(Education::EndDate).date())
                    .col(ColumnDef::new(Education::Description).text().not_null())
                    .col(order_col(Education::Order))
                    .col(is_active_col(Education::IsActive))
                    .col(timestamp_col(Education::CreatedAt))
                    .col(timestamp_col(Education::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experience
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(uuid_pk(Experience::Id))
                    .col(
                        ColumnDef::new(Experience::Organization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::Role).string_len(150).not_null())
                    .col(ColumnDef::new(Experience::StartDate).date().not_null())
                    .col(ColumnDef::new(Experience::EndDate).date())
                    .col(ColumnDef::new(Experience::Description).text().not_null())
                    .col(order_col(Experience::Order))
                    .col(is_active_col(Experience::IsActive))
                    .col(timestamp_col(Experience::CreatedAt))
                    .col(timestamp_col(Experience::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // certifications
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(uuid_pk(Certifications::Id))
                    .col(
                        ColumnDef::new(Certifications::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::Issuer)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Certifications::Year).integer().not_null())
                    .col(order_col(Certifications::Order))
                    .col(is_active_col(Certifications::IsActive))
                    .col(timestamp_col(Certifications::CreatedAt))
                    .col(timestamp_col(Certifications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes + updated_at triggers
        // =====================================================
        for table in ["services", "education", "experience", "certifications"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE INDEX IF NOT EXISTS idx_{table}_active_order
                    ON {table} (is_active, "order");

                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["services", "education", "experience", "certifications"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};
                    DROP INDEX IF EXISTS idx_{table}_active_order;
                    "#
                ))
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

fn uuid_pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

fn order_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

fn is_active_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .boolean()
        .not_null()
        .default(true)
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Icon,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Subtitle,
    Institution,
    StartDate,
    EndDate,
    Description,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Organization,
    Role,
    StartDate,
    EndDate,
    Description,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Title,
    Issuer,
    Year,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
