//! Generic repository over the content tables.
//!
//! Every content entity exposes the same CRUD surface, so instead of a
//! repository per table there is one [`ContentRepository`] parameterized by
//! entity. An entity opts in by implementing [`ContentEntity`], which
//! contributes the pieces that differ between tables: the payload types and
//! their conversion into active models, the listing order, and the display
//! name used in messages.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, Order, PrimaryKeyTrait, QueryFilter, QueryOrder,
};

/// Uniform CRUD shape shared by every content table.
pub trait ContentEntity: EntityTrait {
    /// Payload accepted by create.
    type CreateDto: Send;
    /// Partial payload accepted by update.
    type UpdateDto: Send;

    /// Display name used in response messages ("Team member", "Treatment").
    const NAME: &'static str;

    /// Primary key column, used to address partial updates.
    fn id_column() -> Self::Column;

    /// Column and direction applied to list queries.
    fn list_order() -> (Self::Column, Order);

    /// Builds a fresh active model from a create payload.
    fn create_model(dto: Self::CreateDto) -> Self::ActiveModel;

    /// Builds a partial active model; fields absent from the payload must
    /// stay `NotSet` so the update leaves them untouched.
    fn update_model(dto: Self::UpdateDto) -> Self::ActiveModel;
}

/// Lookup by slug, for entities that carry one (treatments).
pub trait SluggedEntity: ContentEntity {
    fn slug_column() -> Self::Column;
}

pub struct ContentRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> ContentRepository<'a, E>
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

    /// Returns every record in the entity's listing order.
    pub async fn list(&self) -> Result<Vec<E::Model>, DbErr> {
        let (column, order) = E::list_order();
        E::find().order_by(column, order).all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, dto: E::CreateDto) -> Result<E::Model, DbErr> {
        E::create_model(dto).insert(self.db).await
    }

    /// Partial update by id. Fails with `DbErr::RecordNotUpdated` when the
    /// row does not exist.
    pub async fn update(&self, id: i32, dto: E::UpdateDto) -> Result<E::Model, DbErr> {
        let mut model = E::update_model(dto);
        model.set(E::id_column(), id.into());
        model.update(self.db).await
    }

    /// Deletes by id, returning the number of affected rows.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}

impl<'a, E> ContentRepository<'a, E>
where
    E: SluggedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::slug_column().eq(slug))
            .one(self.db)
            .await
    }
}
