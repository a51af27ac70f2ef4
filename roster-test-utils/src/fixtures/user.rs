//! User database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user who has signed in with Discord but not linked a nation.
    ///
    /// # Arguments
    /// - `discord_id` - Discord snowflake of the user
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_user(&self, discord_id: &str) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            username: ActiveValue::Set(format!("user_{}", discord_id)),
            email: ActiveValue::Set(Some(format!("{}@example.com", discord_id))),
            avatar: ActiveValue::Set(None),
            discriminator: ActiveValue::Set(Some("0".to_string())),
            api_key_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            last_login: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a user with a verified API key linked to a nation in an alliance.
    ///
    /// # Arguments
    /// - `discord_id` - Discord snowflake of the user
    /// - `nation_id` - Politics & War nation ID
    /// - `alliance_id` - Politics & War alliance ID the nation belongs to
    /// - `api_key` - Stored Politics & War API key
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_verified_user(
        &self,
        discord_id: &str,
        nation_id: i64,
        alliance_id: i64,
        api_key: &str,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            username: ActiveValue::Set(format!("user_{}", discord_id)),
            email: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            discriminator: ActiveValue::Set(Some("0".to_string())),
            pnw_api_key: ActiveValue::Set(Some(api_key.to_string())),
            nation_id: ActiveValue::Set(Some(nation_id)),
            nation_name: ActiveValue::Set(Some(format!("Nation {}", nation_id))),
            leader_name: ActiveValue::Set(Some(format!("Leader {}", nation_id))),
            alliance_id: ActiveValue::Set(Some(alliance_id)),
            alliance_name: ActiveValue::Set(Some(format!("Alliance {}", alliance_id))),
            alliance_position: ActiveValue::Set(Some("MEMBER".to_string())),
            api_key_verified: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            last_login: ActiveValue::Set(now),
            last_sync: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
