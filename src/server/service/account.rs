//! Linking a Politics & War API key to a signed in account.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::LinkApiKeyResponse,
    server::{
        data::{
            alliance::AllianceRepository, alliance_member::AllianceMemberRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, Error},
        pnw::PnwClient,
        util::slug::alliance_slug,
    },
};

pub struct LinkService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    graphql_url: &'a str,
}

impl<'a> LinkService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        graphql_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            graphql_url,
        }
    }

    /// Verifies `api_key` against the API and links the owning nation to the user.
    ///
    /// The alliance and membership rows are written on a best-effort basis: a failure there
    /// is logged and the link still succeeds, since a later link or sync rewrites both.
    ///
    /// # Returns
    /// - `Ok(LinkApiKeyResponse)` - Key verified and stored on the user
    /// - `Err(Error::PnwError(PnwError::InvalidCredential))` - Key rejected; the user is unchanged
    /// - `Err(Error::PnwError(PnwError::Unavailable))` - API unreachable; the user is unchanged
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User disappeared mid-request
    /// - `Err(Error::DbErr)` - Updating the user failed
    pub async fn link_api_key(
        &self,
        user_id: i32,
        api_key: &str,
    ) -> Result<LinkApiKeyResponse, Error> {
        let nation = PnwClient::new(self.http_client, self.graphql_url, api_key)
            .me()
            .await?;

        let alliance = nation.current_alliance();
        let slug = alliance.map(|alliance| alliance_slug(alliance.id, &alliance.name));

        let alliance_record = match (alliance, slug.as_deref()) {
            (Some(alliance), Some(slug)) => {
                match AllianceRepository::new(self.db).upsert(alliance, slug).await {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::error!(
                            alliance_id = %alliance.id,
                            error = %e,
                            "Failed to store alliance while linking API key"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        let Some(user) = UserRepository::new(self.db)
            .link_nation(user_id, api_key, &nation)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(alliance_record) = &alliance_record {
            if let Err(e) = AllianceMemberRepository::new(self.db)
                .upsert_linked(
                    alliance_record.id,
                    nation.id,
                    user.id,
                    &nation.nation_name,
                    nation.leader_name.as_deref(),
                    nation.alliance_position.as_deref(),
                )
                .await
            {
                tracing::error!(
                    user_id = %user.id,
                    nation_id = %nation.id,
                    alliance_id = %alliance_record.alliance_id,
                    error = %e,
                    "Failed to store alliance membership while linking API key"
                );
            }
        }

        tracing::info!(
            user_id = %user.id,
            nation_id = %nation.id,
            "Linked Politics & War nation to user"
        );

        Ok(LinkApiKeyResponse {
            success: true,
            nation_name: nation.nation_name.clone(),
            alliance_name: alliance.map(|alliance| alliance.name.clone()),
            alliance_slug: slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use roster_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::server::{
        error::{pnw::PnwError, Error},
        service::account::LinkService,
    };

    /// Tests linking a valid key for a nation in an alliance.
    ///
    /// Expected: Ok with the nation and alliance, plus alliance and membership rows
    #[tokio::test]
    async fn links_key_and_records_alliance() -> Result<(), TestError> {
        let nation = factory::mock_nation(5001, Some((77, "The Knights Radiant!!")));
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_me_endpoint(TEST_API_KEY, 200, factory::me_response(nation), 1)
            .build()
            .await?;
        let user = test.user().insert_user(TEST_DISCORD_ID).await?;

        let url = test.graphql_url();
        let result = LinkService::new(&test.db, &test.http_client, &url)
            .link_api_key(user.id, TEST_API_KEY)
            .await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.nation_name, "Nation 5001");
        assert_eq!(
            response.alliance_name.as_deref(),
            Some("The Knights Radiant!!")
        );
        assert_eq!(
            response.alliance_slug.as_deref(),
            Some("the-knights-radiant")
        );

        let alliance = entity::prelude::Alliance::find().one(&test.db).await?.unwrap();
        assert_eq!(alliance.alliance_id, 77);
        assert_eq!(alliance.slug, "the-knights-radiant");
        let member = entity::prelude::AllianceMember::find()
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(member.nation_id, 5001);
        assert_eq!(member.user_id, Some(user.id));
        assert_eq!(member.alliance_id, alliance.id);
        test.assert_mocks();

        Ok(())
    }

    /// Tests linking a key for a nation without an alliance.
    ///
    /// Expected: Ok with no alliance and no alliance rows
    #[tokio::test]
    async fn links_key_without_alliance() -> Result<(), TestError> {
        let nation = factory::mock_nation(5001, None);
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_me_endpoint(TEST_API_KEY, 200, factory::me_response(nation), 1)
            .build()
            .await?;
        let user = test.user().insert_user(TEST_DISCORD_ID).await?;

        let url = test.graphql_url();
        let response = LinkService::new(&test.db, &test.http_client, &url)
            .link_api_key(user.id, TEST_API_KEY)
            .await
            .unwrap();

        assert_eq!(response.alliance_name, None);
        assert_eq!(response.alliance_slug, None);
        assert_eq!(entity::prelude::Alliance::find().count(&test.db).await?, 0);
        let user = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(user.api_key_verified);

        Ok(())
    }

    /// Tests an invalid key leaving the user untouched.
    ///
    /// Expected: Err(PnwError::InvalidCredential) with the user still unverified
    #[tokio::test]
    async fn leaves_user_unchanged_for_invalid_key() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_me_endpoint(TEST_API_KEY, 200, factory::me_without_nation_response(), 1)
            .build()
            .await?;
        let user = test.user().insert_user(TEST_DISCORD_ID).await?;

        let url = test.graphql_url();
        let result = LinkService::new(&test.db, &test.http_client, &url)
            .link_api_key(user.id, TEST_API_KEY)
            .await;

        assert!(matches!(
            result,
            Err(Error::PnwError(PnwError::InvalidCredential(_)))
        ));
        let stored = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored, user);
        test.assert_mocks();

        Ok(())
    }

    /// Tests an unreachable API leaving the user untouched.
    ///
    /// Expected: Err(PnwError::Unavailable)
    #[tokio::test]
    async fn fails_when_api_unavailable() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_me_endpoint(TEST_API_KEY, 502, serde_json::json!({}), 1)
            .build()
            .await?;
        let user = test.user().insert_user(TEST_DISCORD_ID).await?;

        let url = test.graphql_url();
        let result = LinkService::new(&test.db, &test.http_client, &url)
            .link_api_key(user.id, TEST_API_KEY)
            .await;

        assert!(matches!(
            result,
            Err(Error::PnwError(PnwError::Unavailable(_)))
        ));
        let stored = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(!stored.api_key_verified);

        Ok(())
    }

    /// Tests the alliance write failing after the key is verified.
    ///
    /// Expected: Ok, the user is linked even though no alliance row could be written
    #[tokio::test]
    async fn links_key_when_alliance_write_fails() -> Result<(), TestError> {
        let nation = factory::mock_nation(5001, Some((77, "The Knights Radiant")));
        // A different alliance already owns the slug, so the alliance insert conflicts
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(99, "Knights Radiant", "the-knights-radiant")
            .with_me_endpoint(TEST_API_KEY, 200, factory::me_response(nation), 1)
            .build()
            .await?;
        let user = test.user().insert_user(TEST_DISCORD_ID).await?;

        let url = test.graphql_url();
        let result = LinkService::new(&test.db, &test.http_client, &url)
            .link_api_key(user.id, TEST_API_KEY)
            .await;

        assert!(result.is_ok());
        let stored = entity::prelude::User::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(stored.api_key_verified);
        assert_eq!(stored.alliance_id, Some(77));
        assert_eq!(
            entity::prelude::AllianceMember::find().count(&test.db).await?,
            0
        );

        Ok(())
    }
}
