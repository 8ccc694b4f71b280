//! Admin factory. Hashes with a low bcrypt cost to keep tests fast.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

const TEST_BCRYPT_COST: u32 = 4;

pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
}

impl<'a> AdminFactory<'a> {
    /// Defaults: username `admin_{id}`, password `password`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("admin_{}", next_id()),
            password: "password".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plaintext password the stored hash will verify against.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        let hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::admin::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
