use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub discriminator: Option<String>,
    pub pnw_api_key: Option<String>,
    pub nation_id: Option<i64>,
    pub nation_name: Option<String>,
    pub leader_name: Option<String>,
    /// Politics & War alliance ID, not the `alliances` row ID
    pub alliance_id: Option<i64>,
    pub alliance_name: Option<String>,
    pub alliance_position: Option<String>,
    pub api_key_verified: bool,
    pub created_at: DateTime,
    pub last_login: DateTime,
    pub last_sync: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alliance_member::Entity")]
    AllianceMember,
}

impl Related<super::alliance_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllianceMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
