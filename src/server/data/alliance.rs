use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::pnw::model::NationAlliance;

pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or updates an alliance keyed by its Politics & War alliance ID.
    pub async fn upsert(
        &self,
        alliance: &NationAlliance,
        slug: &str,
    ) -> Result<entity::alliance::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Alliance::insert(entity::alliance::ActiveModel {
            alliance_id: ActiveValue::Set(alliance.id),
            alliance_name: ActiveValue::Set(alliance.name.clone()),
            acronym: ActiveValue::Set(alliance.acronym.clone()),
            slug: ActiveValue::Set(slug.to_string()),
            color: ActiveValue::Set(alliance.color.clone()),
            score: ActiveValue::Set(alliance.score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::alliance::Column::AllianceId)
                .update_columns([
                    entity::alliance::Column::AllianceName,
                    entity::alliance::Column::Acronym,
                    entity::alliance::Column::Slug,
                    entity::alliance::Column::Color,
                    entity::alliance::Column::Score,
                    entity::alliance::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Get an alliance using its Politics & War alliance ID
    pub async fn get_by_alliance_id(
        &self,
        alliance_id: i64,
    ) -> Result<Option<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::AllianceId.eq(alliance_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Bumps `updated_at` after a member sync.
    pub async fn touch(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Alliance::update_many()
            .col_expr(
                entity::alliance::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::alliance::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
