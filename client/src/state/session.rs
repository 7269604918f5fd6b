//! Session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session provider (`util::session`); every shell branch
//! reads it. Components never construct a `Present` value themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::SessionError;
use crate::net::types::SessionUser;

/// Shown when the identity provider returns no picture.
pub const PLACEHOLDER_AVATAR: &str = "/images/avatar-placeholder.svg";

/// Identity snapshot rendered by the authenticated user menu.
///
/// Every field is populated; gaps in the wire payload are filled in by
/// [`UserProfile::from_wire`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub avatar_url: String,
    pub display_name: String,
    pub email: String,
}

impl UserProfile {
    /// Normalize a wire user into a renderable profile.
    ///
    /// Blank fields count as missing. The display name falls back to the
    /// nickname, then to the email address.
    pub fn from_wire(user: SessionUser) -> Self {
        let email = non_blank(user.email).unwrap_or_default();
        let display_name = non_blank(user.name)
            .or_else(|| non_blank(user.nickname))
            .unwrap_or_else(|| email.clone());
        let avatar_url = non_blank(user.picture).unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned());

        Self { avatar_url, display_name, email }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Coarse session phase, used to detect transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Absent,
    Present,
}

/// Resolved identity state of the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Fetch outstanding. Also the state rendered during SSR.
    #[default]
    Loading,
    /// Fetch resolved without a user, or failed.
    Absent,
    /// Fetch resolved with a user.
    Present(UserProfile),
}

impl SessionState {
    /// Map a fetch outcome into a session state. Failures degrade to `Absent`.
    pub fn from_fetch(result: Result<Option<SessionUser>, SessionError>) -> Self {
        match result {
            Ok(Some(user)) => Self::Present(UserProfile::from_wire(user)),
            Ok(None) | Err(_) => Self::Absent,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Loading => SessionPhase::Loading,
            Self::Absent => SessionPhase::Absent,
            Self::Present(_) => SessionPhase::Present,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Present(user) => Some(user),
            Self::Loading | Self::Absent => None,
        }
    }
}
