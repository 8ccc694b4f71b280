use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaItem::Id))
                    .col(string(MediaItem::Title))
                    .col(text_null(MediaItem::Description))
                    .col(string_null(MediaItem::Type))
                    .col(string_null(MediaItem::Url))
                    .col(string_null(MediaItem::Thumbnail))
                    .col(string_null(MediaItem::PublishDate))
                    .col(string_null(MediaItem::Category))
                    .col(string_null(MediaItem::Status))
                    .col(
                        timestamp(MediaItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaItem {
    Table,
    Id,
    Title,
    Description,
    Type,
    Url,
    Thumbnail,
    PublishDate,
    Category,
    Status,
    CreatedAt,
}
