//! Request extractors shared by protected routes.
//!
//! - [`auth::AuthUser`] -- the caller identified by a Bearer access token.

pub mod auth;
