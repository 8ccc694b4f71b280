use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Admin login payload.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Minimal admin info exposed to the client; never includes the hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub username: String,
}

impl AdminDto {
    pub fn from_entity(admin: entity::admin::Model) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
        }
    }
}

/// Body of a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseDto {
    pub ok: bool,
    pub message: String,
    pub admin: AdminDto,
}

/// Body of a successful session check.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDto {
    pub ok: bool,
    pub admin: AdminDto,
}
