//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! [`sea_orm::ConnectionTrait`], so they run against a pooled connection or a transaction.

pub mod alliance;
pub mod alliance_member;
pub mod user;
