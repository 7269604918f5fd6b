//! Per-page authentication requirement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Declared once per shell in `config` and read by the gating policy at mount.
//! Never mutated at runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::links::LOGIN_HREF;

/// Whether a page needs a session, and where to send visitors without one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRequirement {
    pub required: bool,
    pub redirect_target: String,
}

impl AuthRequirement {
    /// Public page: guests see the guest user menu.
    pub fn public() -> Self {
        Self { required: false, redirect_target: LOGIN_HREF.to_owned() }
    }

    /// Protected page: guests are redirected to `redirect_target`.
    pub fn login_required(redirect_target: impl Into<String>) -> Self {
        Self { required: true, redirect_target: redirect_target.into() }
    }
}

impl Default for AuthRequirement {
    fn default() -> Self {
        Self::public()
    }
}
