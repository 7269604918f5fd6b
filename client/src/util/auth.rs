//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected shell applies the same login redirect. The redirect is
//! driven by [`RedirectLatch`] so it fires once per loading-to-absent edge and
//! is cancelled when the shell unmounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthRequirement;
use crate::state::session::SessionState;
use crate::util::gate::RedirectLatch;

/// Owner-scoped redirect latch for one mounted shell.
///
/// Cleaning up the owning scope cancels the latch; a disposed handle never
/// yields a redirect.
#[derive(Clone, Copy)]
pub struct LoginRedirect {
    latch: StoredValue<RedirectLatch>,
    requirement: StoredValue<AuthRequirement>,
}

impl LoginRedirect {
    pub fn new(requirement: AuthRequirement) -> Self {
        let latch = StoredValue::new(RedirectLatch::default());
        on_cleanup(move || {
            let _ = latch.try_update_value(RedirectLatch::cancel);
        });
        Self { latch, requirement: StoredValue::new(requirement) }
    }

    /// Feed one session observation; returns the href to navigate to, if any.
    pub fn follow(&self, session: &SessionState, path: &str) -> Option<String> {
        let requirement = self.requirement.try_get_value()?;
        self.latch
            .try_update_value(|l| l.observe(session, &requirement, path))
            .flatten()
    }
}

/// Navigate to the login redirect once the session resolves without a user.
///
/// `path` is read untracked; only session changes re-run the effect.
pub fn install_login_redirect<F>(
    session: Signal<SessionState>,
    requirement: AuthRequirement,
    path: Signal<String>,
    navigate: F,
) where
    F: Fn(&str) + 'static,
{
    let redirect = LoginRedirect::new(requirement);

    Effect::new(move || {
        let state = session.get();
        let current = path.get_untracked();
        if let Some(href) = redirect.follow(&state, &current) {
            #[cfg(feature = "hydrate")]
            log::info!("no session on protected page, redirecting to {href}");
            navigate(&href);
        }
    });
}

/// Full-page navigation; the login endpoints are served outside the router.
pub fn assign_location(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
