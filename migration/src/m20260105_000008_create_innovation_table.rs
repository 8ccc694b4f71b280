use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Innovation::Table)
                    .if_not_exists()
                    .col(pk_auto(Innovation::Id))
                    .col(string(Innovation::Title))
                    .col(text_null(Innovation::Content))
                    .col(string_null(Innovation::Type))
                    .col(string_null(Innovation::Category))
                    .col(string_null(Innovation::Status))
                    .col(string_null(Innovation::Team))
                    .col(string_null(Innovation::StartDate))
                    .col(string_null(Innovation::ImageUrl))
                    .col(string_null(Innovation::Tags))
                    .col(
                        timestamp(Innovation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Innovation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Innovation {
    Table,
    Id,
    Title,
    Content,
    Type,
    Category,
    Status,
    Team,
    StartDate,
    ImageUrl,
    Tags,
    CreatedAt,
}
