use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::data::content::ContentEntity;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "summary must be at least 10 characters"))]
    pub summary: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducationDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "summary must be at least 10 characters"))]
    pub summary: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub link: Option<String>,
}

impl ContentEntity for entity::prelude::Education {
    type CreateDto = CreateEducationDto;
    type UpdateDto = UpdateEducationDto;

    const NAME: &'static str = "Education item";

    fn id_column() -> Self::Column {
        entity::education::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::education::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::education::ActiveModel {
            title: ActiveValue::Set(dto.title),
            summary: ActiveValue::Set(dto.summary),
            image_url: ActiveValue::Set(dto.image_url),
            link: ActiveValue::Set(dto.link),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::education::ActiveModel::default();
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(summary) = dto.summary {
            model.summary = ActiveValue::Set(Some(summary));
        }
        if let Some(image_url) = dto.image_url {
            model.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(link) = dto.link {
            model.link = ActiveValue::Set(Some(link));
        }
        model
    }
}
