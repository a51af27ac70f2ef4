use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliances::Table)
                    .if_not_exists()
                    .col(pk_auto(Alliances::Id))
                    .col(big_integer_uniq(Alliances::AllianceId))
                    .col(string(Alliances::AllianceName))
                    .col(string_null(Alliances::Acronym))
                    .col(string_uniq(Alliances::Slug))
                    .col(string_null(Alliances::Color))
                    .col(double_null(Alliances::Score))
                    .col(timestamp(Alliances::CreatedAt))
                    .col(timestamp(Alliances::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alliances::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alliances {
    Table,
    Id,
    AllianceId,
    AllianceName,
    Acronym,
    Slug,
    Color,
    Score,
    CreatedAt,
    UpdatedAt,
}
