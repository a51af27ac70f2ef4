//! `SeaORM` Entity definitions for the roster database.

pub mod prelude;

pub mod alliance;
pub mod alliance_member;
pub mod user;
