//! Wire DTOs for the auth backend.
//!
//! DESIGN
//! ======
//! Every field is optional: the identity provider decides what it returns.
//! `state::session::UserProfile` fills the gaps before anything renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Profile returned by `GET /api/auth/me`. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Short handle, used when `name` is missing.
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub picture: Option<String>,
}
