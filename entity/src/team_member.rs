use sea_orm::entity::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Clinic doctor or staff member shown on the team page. Listed by the
/// explicit `order` field rather than creation time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "team_member")]
#[serde(rename_all = "camelCase")]
#[schema(as = TeamMember)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub image_url: Option<String>,
    /// Display position, ascending.
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
