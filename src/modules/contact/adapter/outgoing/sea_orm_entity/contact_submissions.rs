use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub is_read: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub submitted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
