//! Tests for authentication controller endpoints: Discord login, the OAuth2 callback,
//! logout and the signed in user lookup.

mod callback;
mod login;
mod logout;
mod user;
