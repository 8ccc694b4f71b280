use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Research::Table)
                    .if_not_exists()
                    .col(pk_auto(Research::Id))
                    .col(string(Research::Title))
                    .col(text_null(Research::Content))
                    .col(string_null(Research::ImageUrl))
                    .col(
                        timestamp(Research::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Research::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Research {
    Table,
    Id,
    Title,
    Content,
    ImageUrl,
    CreatedAt,
}
