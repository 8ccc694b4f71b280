use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{data::content::ContentEntity, util::validate};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInnovationDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate::innovation_type))]
    pub innovation_type: Option<String>,
    #[validate(custom(function = validate::innovation_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::publish_status))]
    pub status: Option<String>,
    #[validate(length(max = 200, message = "team may be at most 200 characters"))]
    pub team: Option<String>,
    #[validate(length(max = 50, message = "start date may be at most 50 characters"))]
    pub start_date: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    #[validate(length(max = 500, message = "tags may be at most 500 characters"))]
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInnovationDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate::innovation_type))]
    pub innovation_type: Option<String>,
    #[validate(custom(function = validate::innovation_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::publish_status))]
    pub status: Option<String>,
    #[validate(length(max = 200, message = "team may be at most 200 characters"))]
    pub team: Option<String>,
    #[validate(length(max = 50, message = "start date may be at most 50 characters"))]
    pub start_date: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    #[validate(length(max = 500, message = "tags may be at most 500 characters"))]
    pub tags: Option<String>,
}

impl ContentEntity for entity::prelude::Innovation {
    type CreateDto = CreateInnovationDto;
    type UpdateDto = UpdateInnovationDto;

    const NAME: &'static str = "Innovation";

    fn id_column() -> Self::Column {
        entity::innovation::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::innovation::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::innovation::ActiveModel {
            title: ActiveValue::Set(dto.title),
            content: ActiveValue::Set(dto.content),
            innovation_type: ActiveValue::Set(dto.innovation_type),
            category: ActiveValue::Set(dto.category),
            status: ActiveValue::Set(dto.status),
            team: ActiveValue::Set(dto.team),
            start_date: ActiveValue::Set(dto.start_date),
            image_url: ActiveValue::Set(dto.image_url),
            tags: ActiveValue::Set(dto.tags),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::innovation::ActiveModel::default();
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(content) = dto.content {
            model.content = ActiveValue::Set(Some(content));
        }
        if let Some(innovation_type) = dto.innovation_type {
            model.innovation_type = ActiveValue::Set(Some(innovation_type));
        }
        if let Some(category) = dto.category {
            model.category = ActiveValue::Set(Some(category));
        }
        if let Some(status) = dto.status {
            model.status = ActiveValue::Set(Some(status));
        }
        if let Some(team) = dto.team {
            model.team = ActiveValue::Set(Some(team));
        }
        if let Some(start_date) = dto.start_date {
            model.start_date = ActiveValue::Set(Some(start_date));
        }
        if let Some(image_url) = dto.image_url {
            model.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(tags) = dto.tags {
            model.tags = ActiveValue::Set(Some(tags));
        }
        model
    }
}
