//! Data transfer objects shared by the web client and the JSON API.

pub mod alliance;
pub mod api;
pub mod user;
