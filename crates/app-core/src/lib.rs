//! Core application logic for DuitKu
//!
//! This crate holds what the UI layer consumes but does not implement:
//! the authentication collaborator contract, the session types it returns,
//! product branding constants, and scripted test doubles.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod branding;
pub mod test_utils;

pub use auth::{Account, AuthError, Authenticator, LoginParams, RegisterParams, Session};
