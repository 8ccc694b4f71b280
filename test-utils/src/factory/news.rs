use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("News {}", next_id()),
            content: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}
