use sea_orm_migration::{prelude::*, schema::*};

static IDX_USERS_NATION_ID: &str = "idx-users-nation_id";
static IDX_USERS_ALLIANCE_ID: &str = "idx-users-alliance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::DiscordId))
                    .col(string(Users::Username))
                    .col(string_null(Users::Email))
                    .col(text_null(Users::Avatar))
                    .col(string_null(Users::Discriminator))
                    .col(text_null(Users::PnwApiKey))
                    .col(big_integer_null(Users::NationId))
                    .col(string_null(Users::NationName))
                    .col(string_null(Users::LeaderName))
                    .col(big_integer_null(Users::AllianceId))
                    .col(string_null(Users::AllianceName))
                    .col(string_null(Users::AlliancePosition))
                    .col(boolean(Users::ApiKeyVerified).default(false))
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::LastLogin))
                    .col(timestamp_null(Users::LastSync))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_NATION_ID)
                    .table(Users::Table)
                    .col(Users::NationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_ALLIANCE_ID)
                    .table(Users::Table)
                    .col(Users::AllianceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USERS_ALLIANCE_ID)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USERS_NATION_ID)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    DiscordId,
    Username,
    Email,
    Avatar,
    Discriminator,
    PnwApiKey,
    NationId,
    NationName,
    LeaderName,
    AllianceId,
    AllianceName,
    AlliancePosition,
    ApiKeyVerified,
    CreatedAt,
    LastLogin,
    LastSync,
}
