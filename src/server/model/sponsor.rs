use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{data::content::ContentEntity, util::validate};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsorDto {
    #[validate(length(min = 2, max = 200, message = "name must be 2-200 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub logo_url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub website: Option<String>,
    #[validate(custom(function = validate::sponsor_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::active_status))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSponsorDto {
    #[validate(length(min = 2, max = 200, message = "name must be 2-200 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub logo_url: Option<String>,
    #[validate(url(message = "enter a valid URL"))]
    pub website: Option<String>,
    #[validate(custom(function = validate::sponsor_category))]
    pub category: Option<String>,
    #[validate(custom(function = validate::active_status))]
    pub status: Option<String>,
}

impl ContentEntity for entity::prelude::Sponsor {
    type CreateDto = CreateSponsorDto;
    type UpdateDto = UpdateSponsorDto;

    const NAME: &'static str = "Sponsor";

    fn id_column() -> Self::Column {
        entity::sponsor::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::sponsor::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::sponsor::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            logo_url: ActiveValue::Set(dto.logo_url),
            website: ActiveValue::Set(dto.website),
            category: ActiveValue::Set(dto.category),
            status: ActiveValue::Set(dto.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::sponsor::ActiveModel::default();
        if let Some(name) = dto.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = dto.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(logo_url) = dto.logo_url {
            model.logo_url = ActiveValue::Set(Some(logo_url));
        }
        if let Some(website) = dto.website {
            model.website = ActiveValue::Set(Some(website));
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
