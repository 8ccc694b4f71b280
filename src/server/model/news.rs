use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::data::content::ContentEntity;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
}

impl ContentEntity for entity::prelude::News {
    type CreateDto = CreateNewsDto;
    type UpdateDto = UpdateNewsDto;

    const NAME: &'static str = "News item";

    fn id_column() -> Self::Column {
        entity::news::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::news::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::news::ActiveModel {
            title: ActiveValue::Set(dto.title),
            content: ActiveValue::Set(dto.content),
            image_url: ActiveValue::Set(dto.image_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::news::ActiveModel::default();
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(content) = dto.content {
            model.content = ActiveValue::Set(Some(content));
        }
        if let Some(image_url) = dto.image_url {
            model.image_url = ActiveValue::Set(Some(image_url));
        }
        model
    }
}
