//! Authentication service layer.
//!
//! Discord OAuth2 login URL generation and callback processing.

pub mod callback;
pub mod login;
