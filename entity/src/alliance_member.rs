use sea_orm::entity::prelude::*;

/// Snapshot of a nation's standing within an alliance.
///
/// Rows are unique on (`nation_id`, `alliance_id`); the unique index is created by the
/// migration rather than derived from this entity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alliance_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// References `alliances.id`
    pub alliance_id: i32,
    pub nation_id: i64,
    pub user_id: Option<i32>,
    pub nation_name: Option<String>,
    pub leader_name: Option<String>,
    pub score: Option<f64>,
    pub cities: Option<i32>,
    pub soldiers: Option<i32>,
    pub tanks: Option<i32>,
    pub aircraft: Option<i32>,
    pub ships: Option<i32>,
    pub missiles: Option<i32>,
    pub nukes: Option<i32>,
    pub position: Option<String>,
    pub war_policy: Option<String>,
    pub domestic_policy: Option<String>,
    pub color: Option<String>,
    pub continent: Option<String>,
    pub last_active: Option<DateTime>,
    pub joined_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alliance::Entity",
        from = "Column::AllianceId",
        to = "super::alliance::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Alliance,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alliance.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
