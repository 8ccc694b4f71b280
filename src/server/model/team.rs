use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    data::content::ContentEntity,
    util::parse::int_or_string,
};

/// Payload for creating a team member.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    #[schema(example = "Dr. Ahmet Yilmaz")]
    pub name: String,
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    #[schema(example = "Neurosurgery Specialist")]
    pub title: String,
    #[validate(length(min = 10, message = "bio must be at least 10 characters"))]
    pub bio: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    /// Display position; accepts a number or a numeric string.
    #[serde(default, deserialize_with = "int_or_string")]
    #[schema(value_type = Option<i32>, example = 1)]
    pub order: Option<i32>,
}

/// Partial payload for updating a team member. Absent fields are retained.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberDto {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "bio must be at least 10 characters"))]
    pub bio: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "int_or_string")]
    #[schema(value_type = Option<i32>)]
    pub order: Option<i32>,
}

impl ContentEntity for entity::prelude::TeamMember {
    type CreateDto = CreateTeamMemberDto;
    type UpdateDto = UpdateTeamMemberDto;

    const NAME: &'static str = "Team member";

    fn id_column() -> Self::Column {
        entity::team_member::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::team_member::Column::Order, Order::Asc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::team_member::ActiveModel {
            name: ActiveValue::Set(dto.name),
            title: ActiveValue::Set(dto.title),
            bio: ActiveValue::Set(dto.bio),
            image_url: ActiveValue::Set(dto.image_url),
            order: ActiveValue::Set(dto.order.unwrap_or(0)),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::team_member::ActiveModel::default();
        if let Some(name) = dto.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(bio) = dto.bio {
            model.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(image_url) = dto.image_url {
            model.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(order) = dto.order {
            model.order = ActiveValue::Set(order);
        }
        model
    }
}
