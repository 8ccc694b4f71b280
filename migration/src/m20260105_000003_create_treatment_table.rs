use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Treatment::Table)
                    .if_not_exists()
                    .col(pk_auto(Treatment::Id))
                    .col(string(Treatment::Title))
                    .col(string_uniq(Treatment::Slug))
                    .col(string_null(Treatment::Summary))
                    .col(text_null(Treatment::Content))
                    .col(string_null(Treatment::ImageUrl))
                    .col(
                        timestamp(Treatment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Treatment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Treatment {
    Table,
    Id,
    Title,
    Slug,
    Summary,
    Content,
    ImageUrl,
    CreatedAt,
}
