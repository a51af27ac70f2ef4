//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an [`AppState`](roster::server::model::app::AppState)
//! built from the test context, verifying status codes, response bodies and session
//! changes for every API endpoint.

mod account;
mod alliance;
mod auth;
