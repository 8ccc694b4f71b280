use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(pk_auto(Education::Id))
                    .col(string(Education::Title))
                    .col(string_null(Education::Summary))
                    .col(string_null(Education::ImageUrl))
                    .col(string_null(Education::Link))
                    .col(
                        timestamp(Education::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Education {
    Table,
    Id,
    Title,
    Summary,
    ImageUrl,
    Link,
    CreatedAt,
}
