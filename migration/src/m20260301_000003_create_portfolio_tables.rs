use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // portfolio_categories
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::Slug)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // portfolio_projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Image).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Kicker)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Role)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Link).text())
                    .col(
                        ColumnDef::new(PortfolioProjects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // portfolio_project_categories join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjectCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjectCategories::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjectCategories::CategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PortfolioProjectCategories::ProjectId)
                            .col(PortfolioProjectCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_project_categories_project_id")
                            .from(
                                PortfolioProjectCategories::Table,
                                PortfolioProjectCategories::ProjectId,
                            )
                            .to(PortfolioProjects::Table, PortfolioProjects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_project_categories_category_id")
                            .from(
                                PortfolioProjectCategories::Table,
                                PortfolioProjectCategories::CategoryId,
                            )
                            .to(PortfolioCategories::Table, PortfolioCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes + triggers
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_projects_active_order
                ON portfolio_projects (is_active, "order");

                CREATE INDEX IF NOT EXISTS idx_portfolio_project_categories_category_id
                ON portfolio_project_categories (category_id);

                CREATE TRIGGER update_portfolio_categories_updated_at
                BEFORE UPDATE ON portfolio_categories
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();

                CREATE TRIGGER update_portfolio_projects_updated_at
                BEFORE UPDATE ON portfolio_projects
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
                DROP TRIGGER IF EXISTS update_portfolio_projects_updated_at ON portfolio_projects;
                DROP TRIGGER IF EXISTS update_portfolio_categories_updated_at ON portfolio_categories;
                DROP INDEX IF EXISTS idx_portfolio_project_categories_category_id;
                DROP INDEX IF EXISTS idx_portfolio_projects_active_order;
                "#,
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(PortfolioProjectCategories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioCategories {
    Table,
    Id,
    Name,
    Slug,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    Id,
    Title,
    Image,
    Description,
    Kicker,
    Role,
    Link,
    IsFeatured,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PortfolioProjectCategories {
    Table,
    ProjectId,
    CategoryId,
}
