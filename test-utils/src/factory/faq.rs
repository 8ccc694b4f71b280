use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    answer: String,
    order: i32,
}

impl<'a> FaqFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {id}?"),
            answer: format!("Answer {id}."),
            order: 0,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        entity::faq::ActiveModel {
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            category: ActiveValue::Set(None),
            order: ActiveValue::Set(self.order),
            status: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
