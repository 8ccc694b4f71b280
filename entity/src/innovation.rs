use sea_orm::entity::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "innovation")]
#[serde(rename_all = "camelCase")]
#[schema(as = Innovation)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub innovation_type: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    /// Free-text team attribution, e.g. the lead surgeon's group.
    pub team: Option<String>,
    pub start_date: Option<String>,
    pub image_url: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
