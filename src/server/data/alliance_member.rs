use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{NullOrdering, Order},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::pnw::model::AllianceMemberRecord;

/// Default position recorded for a member whose alliance position is unknown.
pub const DEFAULT_MEMBER_POSITION: &str = "MEMBER";

pub struct AllianceMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes a full member snapshot from the alliance roster, keyed by
    /// (`nation_id`, `alliance_id`).
    ///
    /// `user_id` is only written when the row is created; later syncs keep whatever user
    /// link the row already has.
    pub async fn upsert(
        &self,
        alliance_id: i32,
        member: &AllianceMemberRecord,
        last_active: Option<NaiveDateTime>,
        user_id: Option<i32>,
    ) -> Result<entity::alliance_member::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::AllianceMember::insert(entity::alliance_member::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            nation_id: ActiveValue::Set(member.id),
            user_id: ActiveValue::Set(user_id),
            nation_name: ActiveValue::Set(member.nation_name.clone()),
            leader_name: ActiveValue::Set(member.leader_name.clone()),
            score: ActiveValue::Set(member.score),
            cities: ActiveValue::Set(member.num_cities),
            soldiers: ActiveValue::Set(member.soldiers),
            tanks: ActiveValue::Set(member.tanks),
            aircraft: ActiveValue::Set(member.aircraft),
            ships: ActiveValue::Set(member.ships),
            missiles: ActiveValue::Set(member.missiles),
            nukes: ActiveValue::Set(member.nukes),
            position: ActiveValue::Set(member.alliance_position.clone()),
            war_policy: ActiveValue::Set(member.war_policy.clone()),
            domestic_policy: ActiveValue::Set(member.domestic_policy.clone()),
            color: ActiveValue::Set(member.color.clone()),
            continent: ActiveValue::Set(member.continent.clone()),
            last_active: ActiveValue::Set(last_active),
            joined_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::alliance_member::Column::NationId,
                entity::alliance_member::Column::AllianceId,
            ])
            .update_columns([
                entity::alliance_member::Column::NationName,
                entity::alliance_member::Column::LeaderName,
                entity::alliance_member::Column::Score,
                entity::alliance_member::Column::Cities,
                entity::alliance_member::Column::Soldiers,
                entity::alliance_member::Column::Tanks,
                entity::alliance_member::Column::Aircraft,
                entity::alliance_member::Column::Ships,
                entity::alliance_member::Column::Missiles,
                entity::alliance_member::Column::Nukes,
                entity::alliance_member::Column::Position,
                entity::alliance_member::Column::WarPolicy,
                entity::alliance_member::Column::DomesticPolicy,
                entity::alliance_member::Column::Color,
                entity::alliance_member::Column::Continent,
                entity::alliance_member::Column::LastActive,
                entity::alliance_member::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Records the linking user's own membership with only the fields known at link time.
    ///
    /// Any roster statistics already stored for the nation are left untouched.
    pub async fn upsert_linked(
        &self,
        alliance_id: i32,
        nation_id: i64,
        user_id: i32,
        nation_name: &str,
        leader_name: Option<&str>,
        position: Option<&str>,
    ) -> Result<entity::alliance_member::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::AllianceMember::insert(entity::alliance_member::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            nation_id: ActiveValue::Set(nation_id),
            user_id: ActiveValue::Set(Some(user_id)),
            nation_name: ActiveValue::Set(Some(nation_name.to_string())),
            leader_name: ActiveValue::Set(leader_name.map(str::to_string)),
            position: ActiveValue::Set(Some(
                position.unwrap_or(DEFAULT_MEMBER_POSITION).to_string(),
            )),
            joined_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::alliance_member::Column::NationId,
                entity::alliance_member::Column::AllianceId,
            ])
            .update_columns([
                entity::alliance_member::Column::UserId,
                entity::alliance_member::Column::NationName,
                entity::alliance_member::Column::LeaderName,
                entity::alliance_member::Column::Position,
                entity::alliance_member::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Members of an alliance ordered by score, highest first, with unscored members last.
    pub async fn list_by_alliance(
        &self,
        alliance_id: i32,
    ) -> Result<Vec<entity::alliance_member::Model>, DbErr> {
        entity::prelude::AllianceMember::find()
            .filter(entity::alliance_member::Column::AllianceId.eq(alliance_id))
            .order_by_with_nulls(
                entity::alliance_member::Column::Score,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::alliance_member::Column::NationId)
            .all(self.db)
            .await
    }
}
