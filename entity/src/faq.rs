use sea_orm::entity::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "faq")]
#[serde(rename_all = "camelCase")]
#[schema(as = Faq)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub category: Option<String>,
    pub order: i32,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
