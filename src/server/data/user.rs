use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{discord::DiscordUser, pnw::model::Nation};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user from their Discord profile, or refreshes the profile fields and login
    /// time of the existing user with the same Discord ID.
    pub async fn upsert_from_discord(
        &self,
        discord_user: &DiscordUser,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_user.id.clone()),
            username: ActiveValue::Set(discord_user.username.clone()),
            email: ActiveValue::Set(discord_user.email.clone()),
            avatar: ActiveValue::Set(discord_user.avatar_url()),
            discriminator: ActiveValue::Set(discord_user.discriminator.clone()),
            api_key_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            last_login: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::Email,
                    entity::user::Column::Avatar,
                    entity::user::Column::Discriminator,
                    entity::user::Column::LastLogin,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Stores a verified API key together with the nation and alliance it resolved to.
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn link_nation(
        &self,
        user_id: i32,
        api_key: &str,
        nation: &Nation,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let alliance = nation.current_alliance();

        let mut user_am = user.into_active_model();
        user_am.pnw_api_key = ActiveValue::Set(Some(api_key.to_string()));
        user_am.nation_id = ActiveValue::Set(Some(nation.id));
        user_am.nation_name = ActiveValue::Set(Some(nation.nation_name.clone()));
        user_am.leader_name = ActiveValue::Set(nation.leader_name.clone());
        user_am.alliance_id = ActiveValue::Set(alliance.map(|a| a.id));
        user_am.alliance_name = ActiveValue::Set(alliance.map(|a| a.name.clone()));
        user_am.alliance_position =
            ActiveValue::Set(alliance.and(nation.alliance_position.clone()));
        user_am.api_key_verified = ActiveValue::Set(true);
        user_am.last_sync = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Finds the API key of the verified user with the lowest ID whose cached alliance is
    /// `alliance_id`.
    pub async fn find_verified_key_for_alliance(
        &self,
        alliance_id: i64,
    ) -> Result<Option<String>, DbErr> {
        let key: Option<Option<String>> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::PnwApiKey)
            .filter(entity::user::Column::AllianceId.eq(alliance_id))
            .filter(entity::user::Column::ApiKeyVerified.eq(true))
            .filter(entity::user::Column::PnwApiKey.is_not_null())
            .order_by_asc(entity::user::Column::Id)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(key.flatten())
    }

    /// Finds users linked to any of the given nations, returning `(nation_id, user_id)` pairs.
    pub async fn get_ids_by_nation_ids(
        &self,
        nation_ids: &[i64],
    ) -> Result<Vec<(Option<i64>, i32)>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::NationId)
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::NationId.is_in(nation_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    fn discord_user(id: &str, username: &str) -> crate::server::discord::DiscordUser {
        crate::server::discord::DiscordUser {
            id: id.to_string(),
            username: username.to_string(),
            global_name: None,
            discriminator: Some("0".to_string()),
            avatar: Some("hash".to_string()),
            email: Some(format!("{}@example.com", username)),
        }
    }

    mod upsert_from_discord {
        use roster_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use super::discord_user;
        use crate::server::data::user::UserRepository;

        /// Expect a new user to be created with an unverified key
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_roster_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo
                .upsert_from_discord(&discord_user(TEST_DISCORD_ID, "kaladin"))
                .await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.discord_id, TEST_DISCORD_ID);
            assert!(!user.api_key_verified);
            assert_eq!(
                user.avatar.as_deref(),
                Some("https://cdn.discordapp.com/avatars/100000000000000001/hash.png")
            );

            Ok(())
        }

        /// Expect a second login to refresh the profile without creating another user
        #[tokio::test]
        async fn refreshes_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_roster_tables()
                .with_verified_user(TEST_DISCORD_ID, 5001, 77, TEST_API_KEY)
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let user = user_repo
                .upsert_from_discord(&discord_user(TEST_DISCORD_ID, "stormblessed"))
                .await?;

            assert_eq!(user.username, "stormblessed");
            // Linked nation survives the profile refresh
            assert!(user.api_key_verified);
            assert_eq!(user.nation_id, Some(5001));
            let count = entity::prelude::User::find().count(&test.db).await?;
            assert_eq!(count, 1);

            Ok(())
        }
    }

    mod link_nation {
        use roster_test_utils::prelude::*;

        use crate::server::{data::user::UserRepository, pnw::model::Nation};

        /// Expect the nation and alliance details to be cached on the user
        #[tokio::test]
        async fn stores_nation_and_alliance() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_roster_tables().build().await?;
            let user = test.user().insert_user(TEST_DISCORD_ID).await?;
            let nation: Nation = serde_json::from_value(factory::mock_nation(
                5001,
                Some((77, "The Knights Radiant")),
            ))
            .unwrap();

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.link_nation(user.id, TEST_API_KEY, &nation).await;

            assert!(matches!(result, Ok(Some(_))));
            let user = result.unwrap().unwrap();
            assert!(user.api_key_verified);
            assert_eq!(user.pnw_api_key.as_deref(), Some(TEST_API_KEY));
            assert_eq!(user.nation_id, Some(5001));
            assert_eq!(user.alliance_id, Some(77));
            assert_eq!(user.alliance_name.as_deref(), Some("The Knights Radiant"));
            assert_eq!(user.alliance_position.as_deref(), Some("MEMBER"));
            assert!(user.last_sync.is_some());

            Ok(())
        }

        /// Expect alliance fields to be cleared for a nation without an alliance
        #[tokio::test]
        async fn clears_alliance_for_unaligned_nation() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_roster_tables()
                .with_verified_user(TEST_DISCORD_ID, 5001, 77, TEST_API_KEY)
                .build()
                .await?;
            let nation: Nation =
                serde_json::from_value(factory::mock_nation(5001, None)).unwrap();

            let user_repo = UserRepository::new(&test.db);
            let user = user_repo
                .link_nation(1, TEST_API_KEY, &nation)
                .await?
                .unwrap();

            assert_eq!(user.alliance_id, None);
            assert_eq!(user.alliance_name, None);
            assert_eq!(user.alliance_position, None);

            Ok(())
        }

        /// Expect Ok(None) for a user that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_roster_tables().build().await?;
            let nation: Nation =
                serde_json::from_value(factory::mock_nation(5001, None)).unwrap();

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.link_nation(1, TEST_API_KEY, &nation).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod find_verified_key_for_alliance {
        use roster_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect the key of the earliest verified user in the alliance
        #[tokio::test]
        async fn returns_lowest_user_id_key() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_roster_tables()
                .with_verified_user("1", 5001, 77, "first_key")
                .with_verified_user("2", 5002, 77, "second_key")
                .with_verified_user("3", 5003, 88, "other_alliance_key")
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_verified_key_for_alliance(77).await;

            assert_eq!(result?, Some("first_key".to_string()));

            Ok(())
        }

        /// Expect None when only unverified users exist
        #[tokio::test]
        async fn ignores_unverified_users() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_roster_tables()
                .with_user(TEST_DISCORD_ID)
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_verified_key_for_alliance(77).await;

            assert_eq!(result?, None);

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_verified_key_for_alliance(77).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
