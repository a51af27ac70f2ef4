//! Test fixture modules for database and HTTP mock creation.
//!
//! - `alliance` - alliance and alliance member records
//! - `discord` - Discord OAuth2 token and profile endpoints
//! - `pnw` - Politics & War GraphQL payloads and endpoints
//! - `user` - user records, with or without a linked nation

pub mod alliance;
pub mod discord;
pub mod pnw;
pub mod user;
