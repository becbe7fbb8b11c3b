use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub slug: String,

    pub order: i32,

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

// Many-to-many: categories <-> projects via portfolio_project_categories
impl Related<super::portfolio_projects::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_project_categories::Relation::Projects.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::portfolio_project_categories::Relation::Categories
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
