pub use sea_orm_migration::prelude::*;

mod m20251101_000001_users;
mod m20251101_000002_alliances;
mod m20251101_000003_alliance_members;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_users::Migration),
            Box::new(m20251101_000002_alliances::Migration),
            Box::new(m20251101_000003_alliance_members::Migration),
        ]
    }
}
