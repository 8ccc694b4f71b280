use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sponsor::Table)
                    .if_not_exists()
                    .col(pk_auto(Sponsor::Id))
                    .col(string(Sponsor::Name))
                    .col(text_null(Sponsor::Description))
                    .col(string_null(Sponsor::LogoUrl))
                    .col(string_null(Sponsor::Website))
                    .col(string_null(Sponsor::Category))
                    .col(string_null(Sponsor::Status))
                    .col(
                        timestamp(Sponsor::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sponsor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sponsor {
    Table,
    Id,
    Name,
    Description,
    LogoUrl,
    Website,
    Category,
    Status,
    CreatedAt,
}
