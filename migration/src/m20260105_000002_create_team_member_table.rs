use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(string(TeamMember::Name))
                    .col(string(TeamMember::Title))
                    .col(text_null(TeamMember::Bio))
                    .col(string_null(TeamMember::ImageUrl))
                    .col(integer(TeamMember::Order).default(0))
                    .col(
                        timestamp(TeamMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    Name,
    Title,
    Bio,
    ImageUrl,
    Order,
    CreatedAt,
}
