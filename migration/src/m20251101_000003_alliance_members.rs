use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_users::Users, m20251101_000002_alliances::Alliances};

static IDX_ALLIANCE_MEMBERS_NATION_ALLIANCE: &str = "idx-alliance_members-nation_id-alliance_id";
static IDX_ALLIANCE_MEMBERS_USER_ID: &str = "idx-alliance_members-user_id";
static FK_ALLIANCE_MEMBERS_ALLIANCE_ID: &str = "fk-alliance_members-alliance_id";
static FK_ALLIANCE_MEMBERS_USER_ID: &str = "fk-alliance_members-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllianceMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(AllianceMembers::Id))
                    .col(integer(AllianceMembers::AllianceId))
                    .col(big_integer(AllianceMembers::NationId))
                    .col(integer_null(AllianceMembers::UserId))
                    .col(string_null(AllianceMembers::NationName))
                    .col(string_null(AllianceMembers::LeaderName))
                    .col(double_null(AllianceMembers::Score))
                    .col(integer_null(AllianceMembers::Cities))
                    .col(integer_null(AllianceMembers::Soldiers))
                    .col(integer_null(AllianceMembers::Tanks))
                    .col(integer_null(AllianceMembers::Aircraft))
                    .col(integer_null(AllianceMembers::Ships))
                    .col(integer_null(AllianceMembers::Missiles))
                    .col(integer_null(AllianceMembers::Nukes))
                    .col(string_null(AllianceMembers::Position))
                    .col(string_null(AllianceMembers::WarPolicy))
                    .col(string_null(AllianceMembers::DomesticPolicy))
                    .col(string_null(AllianceMembers::Color))
                    .col(string_null(AllianceMembers::Continent))
                    .col(timestamp_null(AllianceMembers::LastActive))
                    .col(timestamp(AllianceMembers::JoinedAt))
                    .col(timestamp(AllianceMembers::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MEMBERS_NATION_ALLIANCE)
                    .table(AllianceMembers::Table)
                    .col(AllianceMembers::NationId)
                    .col(AllianceMembers::AllianceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MEMBERS_USER_ID)
                    .table(AllianceMembers::Table)
                    .col(AllianceMembers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBERS_ALLIANCE_ID)
                    .from_tbl(AllianceMembers::Table)
                    .from_col(AllianceMembers::AllianceId)
                    .to_tbl(Alliances::Table)
                    .to_col(Alliances::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBERS_USER_ID)
                    .from_tbl(AllianceMembers::Table)
                    .from_col(AllianceMembers::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALLIANCE_MEMBERS_USER_ID)
                    .table(AllianceMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALLIANCE_MEMBERS_ALLIANCE_ID)
                    .table(AllianceMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MEMBERS_USER_ID)
                    .table(AllianceMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MEMBERS_NATION_ALLIANCE)
                    .table(AllianceMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AllianceMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AllianceMembers {
    Table,
    Id,
    AllianceId,
    NationId,
    UserId,
    NationName,
    LeaderName,
    Score,
    Cities,
    Soldiers,
    Tanks,
    Aircraft,
    Ships,
    Missiles,
    Nukes,
    Position,
    WarPolicy,
    DomesticPolicy,
    Color,
    Continent,
    LastActive,
    JoinedAt,
    UpdatedAt,
}
