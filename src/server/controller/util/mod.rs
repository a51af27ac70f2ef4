//! Helpers shared by controllers: CSRF validation and resolving the signed in user.

pub mod csrf;
pub mod get_user;
