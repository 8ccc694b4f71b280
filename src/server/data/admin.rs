//! Admin account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Whether any admin account has been created yet. Used by startup
    /// seeding.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;
        Ok(count > 0)
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
