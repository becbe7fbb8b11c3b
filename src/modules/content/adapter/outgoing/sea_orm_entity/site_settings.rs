use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    /// Always 1; the table carries a CHECK constraint.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub hero_greeting: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub hero_name: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub hero_title: String,

    #[sea_orm(column_type = "Text")]
    pub hero_description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_image: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub about_title: String,

    #[sea_orm(column_type = "Text")]
    pub about_description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub about_image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub logo: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub favicon: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub footer_text: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
