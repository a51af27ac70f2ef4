//! Alliance roster sync and the alliance page read model.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::alliance::{AllianceDto, AllianceMemberDto, AlliancePageDto, ViewerDto},
    server::{
        config::SyncCredentialSource,
        data::{
            alliance::AllianceRepository, alliance_member::AllianceMemberRepository,
            user::UserRepository,
        },
        error::{alliance::AllianceError, Error},
        pnw::{model::AllianceMemberRecord, PnwClient},
    },
};

/// Result of a roster sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Members stored successfully
    pub synced: u64,
    /// Members fetched from the API
    pub total: u64,
}

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    graphql_url: &'a str,
    credential_source: SyncCredentialSource,
}

impl<'a> SyncService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        graphql_url: &'a str,
        credential_source: SyncCredentialSource,
    ) -> Self {
        Self {
            db,
            http_client,
            graphql_url,
            credential_source,
        }
    }

    /// Refreshes the stored roster of a registered alliance from the API.
    ///
    /// The alliance must already be recorded and an API key must be available for it
    /// before any request is sent. Members are then fetched in full and stored one by one;
    /// a member that cannot be stored is logged and skipped without stopping the rest.
    ///
    /// # Arguments
    /// - `caller_user_id` - User requesting the sync, used by [`SyncCredentialSource::Caller`]
    /// - `alliance_id` - Politics & War alliance ID
    ///
    /// # Returns
    /// - `Ok(SyncOutcome)` - Roster fetched, with the stored and fetched member counts
    /// - `Err(Error::AllianceError(AllianceError::NotFound))` - Alliance is not registered
    /// - `Err(Error::AllianceError(AllianceError::NoCredentialAvailable))` - No usable API key
    /// - `Err(Error::PnwError(_))` - Fetching any page of the roster failed
    /// - `Err(Error::DbErr)` - Reading the alliance or its API key failed
    pub async fn sync(&self, caller_user_id: i32, alliance_id: i64) -> Result<SyncOutcome, Error> {
        let alliance = AllianceRepository::new(self.db)
            .get_by_alliance_id(alliance_id)
            .await?
            .ok_or(AllianceError::NotFound(alliance_id))?;

        let api_key = self
            .resolve_api_key(caller_user_id, alliance_id)
            .await?
            .ok_or(AllianceError::NoCredentialAvailable(alliance_id))?;

        let members = PnwClient::new(self.http_client, self.graphql_url, &api_key)
            .alliance_members(alliance_id)
            .await?;

        let nation_ids: Vec<i64> = members.iter().map(|member| member.id).collect();
        // Linking members to users is best effort, rows are stored unlinked if this fails
        let linked_users: HashMap<i64, i32> = match UserRepository::new(self.db)
            .get_ids_by_nation_ids(&nation_ids)
            .await
        {
            Ok(ids) => ids
                .into_iter()
                .filter_map(|(nation_id, user_id)| nation_id.map(|nation_id| (nation_id, user_id)))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    alliance_id = %alliance_id,
                    error = %e,
                    "Failed to look up users for alliance members, storing them unlinked"
                );
                HashMap::new()
            }
        };

        let member_repo = AllianceMemberRepository::new(self.db);
        let mut synced = 0;

        for member in &members {
            let stored = match parse_last_active(member) {
                Ok(last_active) => member_repo
                    .upsert(
                        alliance.id,
                        member,
                        last_active,
                        linked_users.get(&member.id).copied(),
                    )
                    .await
                    .map_err(Error::from),
                Err(e) => Err(e),
            };

            match stored {
                Ok(_) => synced += 1,
                Err(e) => tracing::warn!(
                    alliance_id = %alliance_id,
                    nation_id = %member.id,
                    error = %e,
                    "Failed to store alliance member, skipping"
                ),
            }
        }

        if let Err(e) = AllianceRepository::new(self.db).touch(alliance.id).await {
            tracing::warn!(
                alliance_id = %alliance_id,
                error = %e,
                "Failed to update alliance sync timestamp"
            );
        }

        let outcome = SyncOutcome {
            synced,
            total: members.len() as u64,
        };

        tracing::info!(
            alliance_id = %alliance_id,
            synced = %outcome.synced,
            total = %outcome.total,
            "Synced alliance roster"
        );

        Ok(outcome)
    }

    async fn resolve_api_key(
        &self,
        caller_user_id: i32,
        alliance_id: i64,
    ) -> Result<Option<String>, Error> {
        let user_repo = UserRepository::new(self.db);

        let api_key = match self.credential_source {
            SyncCredentialSource::Alliance => {
                user_repo.find_verified_key_for_alliance(alliance_id).await?
            }
            SyncCredentialSource::Caller => user_repo
                .get(caller_user_id)
                .await?
                .filter(|user| user.api_key_verified && user.alliance_id == Some(alliance_id))
                .and_then(|user| user.pnw_api_key),
        };

        Ok(api_key)
    }
}

fn parse_last_active(member: &AllianceMemberRecord) -> Result<Option<NaiveDateTime>, Error> {
    member
        .last_active
        .as_deref()
        .map(|value| {
            DateTime::parse_from_rfc3339(value)
                .map(|timestamp| timestamp.naive_utc())
                .map_err(|e| {
                    Error::ParseError(format!("last_active {:?} for nation {}: {}", value, member.id, e))
                })
        })
        .transpose()
}

/// Builds the alliance page from the stored snapshot on every request.
pub struct AllianceViewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceViewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the alliance behind `slug`, its members and how `viewer_user_id` relates to it.
    ///
    /// Only the alliance lookup can fail the request. A failed member or viewer read is
    /// logged and rendered as an empty roster or an anonymous viewer.
    pub async fn get_page(&self, slug: &str, viewer_user_id: i32) -> Result<AlliancePageDto, Error> {
        let alliance = AllianceRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AllianceError::SlugNotFound(slug.to_string()))?;

        let members = match AllianceMemberRepository::new(self.db)
            .list_by_alliance(alliance.id)
            .await
        {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!(
                    alliance_id = %alliance.alliance_id,
                    error = %e,
                    "Failed to read alliance members"
                );
                Vec::new()
            }
        };

        let viewer = match UserRepository::new(self.db).get(viewer_user_id).await {
            Ok(Some(user)) => {
                let in_alliance =
                    user.api_key_verified && user.alliance_id == Some(alliance.alliance_id);
                let on_roster = user
                    .nation_id
                    .is_some_and(|nation_id| members.iter().any(|m| m.nation_id == nation_id));

                ViewerDto {
                    is_member: in_alliance || on_roster,
                    nation_name: user.nation_name,
                    position: user.alliance_position.filter(|_| in_alliance),
                    can_sync: in_alliance,
                }
            }
            Ok(None) => ViewerDto::default(),
            Err(e) => {
                tracing::warn!(
                    user_id = %viewer_user_id,
                    error = %e,
                    "Failed to read viewer for alliance page"
                );
                ViewerDto::default()
            }
        };

        let members: Vec<AllianceMemberDto> = members
            .into_iter()
            .map(|member| AllianceMemberDto {
                nation_id: member.nation_id,
                nation_name: member.nation_name,
                leader_name: member.leader_name,
                score: member.score,
                cities: member.cities,
                soldiers: member.soldiers,
                tanks: member.tanks,
                aircraft: member.aircraft,
                ships: member.ships,
                missiles: member.missiles,
                nukes: member.nukes,
                position: member.position,
                war_policy: member.war_policy,
                domestic_policy: member.domestic_policy,
                color: member.color,
                continent: member.continent,
                last_active: member.last_active,
                linked: member.user_id.is_some(),
                updated_at: member.updated_at,
            })
            .collect();

        Ok(AlliancePageDto {
            alliance: AllianceDto {
                alliance_id: alliance.alliance_id,
                name: alliance.alliance_name,
                acronym: alliance.acronym,
                slug: alliance.slug,
                color: alliance.color,
                score: alliance.score,
                member_count: members.len() as u64,
                updated_at: alliance.updated_at,
            },
            members,
            viewer,
        })
    }
}
