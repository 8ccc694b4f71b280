use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct TreatmentFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    summary: Option<String>,
    content: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> TreatmentFactory<'a> {
    /// Defaults: title `Treatment {id}` with a matching unique slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Treatment {id}"),
            slug: format!("treatment-{id}"),
            summary: None,
            content: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::treatment::Model, DbErr> {
        entity::treatment::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            summary: ActiveValue::Set(self.summary),
            content: ActiveValue::Set(self.content),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_treatment(db: &DatabaseConnection) -> Result<entity::treatment::Model, DbErr> {
    TreatmentFactory::new(db).build().await
}

pub async fn create_treatment_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::treatment::Model, DbErr> {
    TreatmentFactory::new(db).slug(slug).build().await
}
