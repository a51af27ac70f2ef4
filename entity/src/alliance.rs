use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alliances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub alliance_id: i64,
    pub alliance_name: String,
    pub acronym: Option<String>,
    #[sea_orm(unique)]
    pub slug: String,
    pub color: Option<String>,
    pub score: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
