//! Server application core modules.
//!
//! Everything server side: HTTP routing, Discord login, sessions, database access and the
//! Politics & War GraphQL client used to verify API keys and sync alliance rosters.

pub mod config;
pub mod controller;
pub mod data;
pub mod discord;
pub mod error;
pub mod model;
pub mod pnw;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
