//! Service layer for business logic.
//!
//! Services coordinate repositories with the Discord and Politics & War APIs. Each service
//! borrows what it needs from the application state for the duration of one request.

pub mod account;
pub mod alliance;
pub mod auth;
pub mod user;
