use sea_orm::{ActiveValue, Order};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    data::content::ContentEntity,
    util::{parse::int_or_string, validate},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqDto {
    #[validate(length(min = 5, max = 500, message = "question must be 5-500 characters"))]
    pub question: String,
    #[validate(length(min = 5, max = 2000, message = "answer must be 5-2000 characters"))]
    pub answer: String,
    #[validate(custom(function = validate::faq_category))]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "int_or_string")]
    #[schema(value_type = Option<i32>)]
    pub order: Option<i32>,
    #[validate(custom(function = validate::active_status))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqDto {
    #[validate(length(min = 5, max = 500, message = "question must be 5-500 characters"))]
    pub question: Option<String>,
    #[validate(length(min = 5, max = 2000, message = "answer must be 5-2000 characters"))]
    pub answer: Option<String>,
    #[validate(custom(function = validate::faq_category))]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "int_or_string")]
    #[schema(value_type = Option<i32>)]
    pub order: Option<i32>,
    #[validate(custom(function = validate::active_status))]
    pub status: Option<String>,
}

impl ContentEntity for entity::prelude::Faq {
    type CreateDto = CreateFaqDto;
    type UpdateDto = UpdateFaqDto;

    const NAME: &'static str = "FAQ entry";

    fn id_column() -> Self::Column {
        entity::faq::Column::Id
    }

    fn list_order() -> (Self::Column, Order) {
        (entity::faq::Column::CreatedAt, Order::Desc)
    }

    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel {
        entity::faq::ActiveModel {
            question: ActiveValue::Set(dto.question),
            answer: ActiveValue::Set(dto.answer),
            category: ActiveValue::Set(dto.category),
            order: ActiveValue::Set(dto.order.unwrap_or(0)),
            status: ActiveValue::Set(dto.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel {
        let mut model = entity::faq::ActiveModel::default();
        if let Some(question) = dto.question {
            model.question = ActiveValue::Set(question);
        }
        if let Some(answer) = dto.answer {
            model.answer = ActiveValue::Set(answer);
        }
        if let Some(category) = dto.category {
            model.category = ActiveValue::Set(Some(category));
        }
        if let Some(order) = dto.order {
            model.order = ActiveValue::Set(order);
        }
        if let Some(status) = dto.status {
            model.status = ActiveValue::Set(Some(status));
        }
        model
    }
}
