use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LinkedAllianceDto, LinkedNationDto, UserDto},
    server::{
        data::{alliance::AllianceRepository, user::UserRepository},
        error::Error,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user with their linked nation and, when recorded, their alliance's page slug.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let Some(user) = UserRepository::new(self.db).get(user_id).await? else {
            return Ok(None);
        };

        let alliance = match (user.alliance_id, user.alliance_name.clone()) {
            (Some(alliance_id), Some(name)) => {
                let slug = AllianceRepository::new(self.db)
                    .get_by_alliance_id(alliance_id)
                    .await?
                    .map(|alliance| alliance.slug);

                Some(LinkedAllianceDto {
                    alliance_id,
                    name,
                    position: user.alliance_position.clone(),
                    slug,
                })
            }
            _ => None,
        };

        let nation = match (user.nation_id, user.nation_name.clone()) {
            (Some(nation_id), Some(nation_name)) if user.api_key_verified => {
                Some(LinkedNationDto {
                    nation_id,
                    nation_name,
                    leader_name: user.leader_name.clone(),
                    alliance,
                })
            }
            _ => None,
        };

        Ok(Some(UserDto {
            id: user.id,
            discord_id: user.discord_id,
            username: user.username,
            avatar: user.avatar,
            api_key_verified: user.api_key_verified,
            nation,
            last_sync: user.last_sync,
        }))
    }
}
