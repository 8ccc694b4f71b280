use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{data::content::ContentEntity, util::validate};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaItemDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate::media_type))]
    pub media_type: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub thumbnail: Option<String>,
    #[validate(length(max = 50, message = "publish date may be at most 50 characters"))]
    pub publish_date: Option<String>,
    #[validate(custom(function = validate::media_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::publish_status))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaItemDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = validate::media_type))]
    pub media_type: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub thumbnail: Option<String>,
    #[validate(length(max = 50, message = "publish date may be at most 50 characters"))]
    pub publish_date: Option<String>,
    #[validate(custom(function = validate::media_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::publish_status))]
    pub status: Option<String>,
}

impl ContentEntity for entity::prelude::MediaItem {
    type CreateDto = CreateMediaItemDto;
    type UpdateDto = UpdateMediaItemDto;

    const NAME: &'static str = "Media item";

    fn id_column() -> Self::Column {
        entity::media_item::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::media_item::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::media_item::ActiveModel {
            title: ActiveValue::Set(dto.title),
            description: ActiveValue::Set(dto.description),
            media_type: ActiveValue::Set(dto.media_type),
            url: ActiveValue::Set(dto.url),
            thumbnail: ActiveValue::Set(dto.thumbnail),
            publish_date: ActiveValue::Set(dto.publish_date),
            category: ActiveValue::Set(dto.category),
            status: ActiveValue::Set(dto.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::media_item::ActiveModel::default();
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(description) = dto.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(media_type) = dto.media_type {
            model.media_type = ActiveValue::Set(Some(media_type));
        }
        if let Some(url) = dto.url {
            model.url = ActiveValue::Set(Some(url));
        }
        if let Some(thumbnail) = dto.thumbnail {
            model.thumbnail = ActiveValue::Set(Some(thumbnail));
        }
        if let Some(publish_date) = dto.publish_date {
            model.publish_date = ActiveValue::Set(Some(publish_date));
        }
        if let Some(category) = dto.category {
            model.category = ActiveValue::Set(Some(category));
        }
        if let Some(status) = dto.status {
            model.status = ActiveValue::Set(Some(status));
        }
        model
    }
}
