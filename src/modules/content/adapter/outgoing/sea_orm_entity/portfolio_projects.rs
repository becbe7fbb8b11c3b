use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub kicker: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub role: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,

    pub is_featured: bool,

    pub order: i32,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_project_categories::Entity")]
    PortfolioProjectCategories,
}

impl Related<super::portfolio_project_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioProjectCategories.def()
    }
}

impl Related<super::portfolio_categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_project_categories::Relation::Categories.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::portfolio_project_categories::Relation::Projects
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
