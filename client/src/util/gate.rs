//! Session gating policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell resolves one [`Gate`] per render from the session, the page's
//! auth requirement and the current path. Desktop and mobile branches both
//! read the same value, so they cannot disagree about what to show.
//!
//! The login redirect is a side effect and must fire once per
//! loading-to-absent transition, not once per render. [`RedirectLatch`]
//! tracks the previous phase to detect that edge.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::auth::AuthRequirement;
use crate::state::session::{SessionPhase, SessionState, UserProfile};
use crate::util::links::redirect_href;

/// What the shell may show for this render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Session still loading: skeleton chrome only.
    Pending,
    /// Login required and no session: skeleton only, redirecting to the href.
    Redirect(String),
    /// Public page without a session.
    Guest,
    /// Signed-in visitor.
    Member(UserProfile),
}

impl Gate {
    /// Nav, user menu and mobile controls are only shown once resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Guest | Self::Member(_))
    }
}

/// Resolve the gate for one render.
pub fn resolve(session: &SessionState, requirement: &AuthRequirement, path: &str) -> Gate {
    match session {
        SessionState::Loading => Gate::Pending,
        SessionState::Absent if requirement.required => {
            Gate::Redirect(redirect_href(&requirement.redirect_target, path))
        }
        SessionState::Absent => Gate::Guest,
        SessionState::Present(user) => Gate::Member(user.clone()),
    }
}

/// One-shot guard for the login redirect.
///
/// A shell mounts in `Loading`, so the first observation is compared against
/// `Loading`. Once cancelled (shell unmounted) it never fires again.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    last_phase: Option<SessionPhase>,
    cancelled: bool,
}

impl RedirectLatch {
    /// Record the current session and return the redirect href if this
    /// observation is a loading-to-absent edge on a protected page.
    pub fn observe(&mut self, session: &SessionState, requirement: &AuthRequirement, path: &str) -> Option<String> {
        let phase = session.phase();
        let previous = self.last_phase.replace(phase).unwrap_or(SessionPhase::Loading);

        if self.cancelled || !requirement.required {
            return None;
        }
        if previous == SessionPhase::Loading && phase == SessionPhase::Absent {
            return Some(redirect_href(&requirement.redirect_target, path));
        }
        None
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
