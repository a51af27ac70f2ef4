//! Server-side models: shared application state and typed session entries.

pub mod app;
pub mod session;
