use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    data::content::{ContentEntity, SluggedEntity},
    util::validate,
};

/// Payload for creating a treatment. The slug becomes the public lookup key
/// and must be unique.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTreatmentDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    #[schema(example = "Spine Stabilization")]
    pub title: String,
    #[validate(
        length(min = 2, max = 200, message = "slug must be 2-200 characters"),
        custom(function = validate::slug)
    )]
    #[schema(example = "spine-stabilization")]
    pub slug: String,
    #[validate(length(max = 500, message = "summary may be at most 500 characters"))]
    pub summary: Option<String>,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
}

/// Partial payload for updating a treatment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTreatmentDto {
    #[validate(length(min = 2, max = 200, message = "title must be 2-200 characters"))]
    pub title: Option<String>,
    #[validate(
        length(min = 2, max = 200, message = "slug must be 2-200 characters"),
        custom(function = validate::slug)
    )]
    pub slug: Option<String>,
    #[validate(length(max = 500, message = "summary may be at most 500 characters"))]
    pub summary: Option<String>,
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub image_url: Option<String>,
}

impl ContentEntity for entity::prelude::Treatment {
    type CreateDto = CreateTreatmentDto;
    type UpdateDto = UpdateTreatmentDto;

    const NAME: &'static str = "Treatment";

    fn id_column() -> Self::Column {
        entity::treatment::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::treatment::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::treatment::ActiveModel {
            title: ActiveValue::Set(dto.title),
            slug: ActiveValue::Set(dto.slug),
            summary: ActiveValue::Set(dto.summary),
            content: ActiveValue::Set(dto.content),
            image_url: ActiveValue::Set(dto.image_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::treatment::ActiveModel::default();
        if let Some(title) = dto.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = dto.slug {
            model.slug = ActiveValue::Set(slug);
        }
        if let Some(summary) = dto.summary {
            model.summary = ActiveValue::Set(Some(summary));
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

impl SluggedEntity for entity::prelude::Treatment {
    fn slug_column() -> Self::Column {
        entity::treatment::Column::Slug
    }
}
