use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    bio: Option<String>,
    image_url: Option<String>,
    order: i32,
    created_at: DateTime<Utc>,
}

impl<'a> TeamMemberFactory<'a> {
    /// Defaults: name `Doctor {id}`, title `Specialist`, order 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Doctor {}", next_id()),
            title: "Specialist".to_string(),
            bio: None,
            image_url: None,
            order: 0,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            bio: ActiveValue::Set(self.bio),
            image_url: ActiveValue::Set(self.image_url),
            order: ActiveValue::Set(self.order),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_team_member(
    db: &DatabaseConnection,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db).build().await
}
