//! Alliance and alliance member database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{AllianceMemberModel, AllianceModel},
    TestContext,
};

impl TestContext {
    pub fn alliance<'a>(&'a mut self) -> AllianceFixtures<'a> {
        AllianceFixtures { setup: self }
    }
}

pub struct AllianceFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AllianceFixtures<'a> {
    /// Insert an alliance record.
    ///
    /// Returns the existing record if an alliance with `alliance_id` is already present.
    ///
    /// # Arguments
    /// - `alliance_id` - Politics & War alliance ID
    /// - `name` - Alliance name
    /// - `slug` - URL slug for the alliance page
    ///
    /// # Returns
    /// - `Ok(AllianceModel)` - The created or existing alliance record
    /// - `Err(TestError::DbErr)` - Query or insert failed
    pub async fn insert_alliance(
        &self,
        alliance_id: i64,
        name: &str,
        slug: &str,
    ) -> Result<AllianceModel, TestError> {
        if let Some(existing) = entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::AllianceId.eq(alliance_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Alliance::insert(entity::alliance::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            alliance_name: ActiveValue::Set(name.to_string()),
            acronym: ActiveValue::Set(None),
            slug: ActiveValue::Set(slug.to_string()),
            color: ActiveValue::Set(Some("blue".to_string())),
            score: ActiveValue::Set(Some(10_000.0)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an alliance member snapshot row.
    ///
    /// # Arguments
    /// - `alliance_id` - Politics & War alliance ID; the alliance must already exist
    /// - `nation_id` - Politics & War nation ID
    /// - `score` - Nation score, `None` for a row without a score
    ///
    /// # Returns
    /// - `Ok(AllianceMemberModel)` - The created member record
    /// - `Err(TestError::DbErr)` - Alliance missing or insert failed
    pub async fn insert_member(
        &self,
        alliance_id: i64,
        nation_id: i64,
        score: Option<f64>,
    ) -> Result<AllianceMemberModel, TestError> {
        let alliance = entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::AllianceId.eq(alliance_id))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("alliance {} not inserted", alliance_id))
            })?;

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AllianceMember::insert(entity::alliance_member::ActiveModel {
                alliance_id: ActiveValue::Set(alliance.id),
                nation_id: ActiveValue::Set(nation_id),
                user_id: ActiveValue::Set(None),
                nation_name: ActiveValue::Set(Some(format!("Nation {}", nation_id))),
                leader_name: ActiveValue::Set(Some(format!("Leader {}", nation_id))),
                score: ActiveValue::Set(score),
                position: ActiveValue::Set(Some("MEMBER".to_string())),
                joined_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
