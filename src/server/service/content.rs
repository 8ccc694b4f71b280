//! Uniform content operations between the controllers and the repository.
//!
//! Translates repository errors into the application taxonomy: uniqueness
//! violations become `Conflict`, missing rows become `NotFound`, and
//! anything unexpected propagates as a database error that renders as a
//! generic 500.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, DatabaseConnection, DbErr, IntoActiveModel, PrimaryKeyTrait, SqlErr,
};

use crate::server::{
    data::content::{ContentEntity, ContentRepository, SluggedEntity},
    error::AppError,
};

pub struct ContentService<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> ContentService<'a, E>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<E::Model>, AppError> {
        Ok(ContentRepository::<E>::new(self.db).list().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<E::Model, AppError> {
        ContentRepository::<E>::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found::<E>)
    }

    pub async fn create(&self, dto: E::CreateDto) -> Result<E::Model, AppError> {
        ContentRepository::<E>::new(self.db)
            .create(dto)
            .await
            .map_err(classify::<E>)
    }

    pub async fn update(&self, id: i32, dto: E::UpdateDto) -> Result<E::Model, AppError> {
        ContentRepository::<E>::new(self.db)
            .update(id, dto)
            .await
            .map_err(classify::<E>)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = ContentRepository::<E>::new(self.db).delete(id).await?;
        if rows == 0 {
            return Err(not_found::<E>());
        }
        Ok(())
    }
}

impl<'a, E> ContentService<'a, E>
where
    E: SluggedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub async fn get_by_slug(&self, slug: &str) -> Result<E::Model, AppError> {
        ContentRepository::<E>::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(not_found::<E>)
    }
}

fn not_found<E: ContentEntity>() -> AppError {
    AppError::NotFound(format!("{} not found", E::NAME))
}

/// Maps the known failure shapes of writes onto the error taxonomy.
fn classify<E: ContentEntity>(err: DbErr) -> AppError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return AppError::Conflict("This value is already in use".to_string());
    }
    if matches!(err, DbErr::RecordNotUpdated) {
        return not_found::<E>();
    }
    AppError::DbErr(err)
}
