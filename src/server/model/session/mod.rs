//! Typed session entries.
//!
//! Each submodule wraps one key in the tower-sessions store with `insert`/`get`/`remove`
//! helpers, so handlers never touch raw keys or serialized values.

pub mod auth;
pub mod user;
