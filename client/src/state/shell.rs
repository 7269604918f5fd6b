//! Render model of the shell.
//!
//! DESIGN
//! ======
//! `ShellFrame::compose` is the single place that turns the gate, the route
//! table and the menu state into what the header, mobile panel and main area
//! show. Components render a frame verbatim and hold no gating logic of their
//! own, so desktop and mobile cannot drift apart.
//!
//! Nav and user menu render twice once the session resolves: inline in the
//! desktop header and stacked in the mobile panel. The panel stays in the tree
//! while closed and is only hidden, matching the desktop/mobile duplicate
//! count that automation relies on.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use super::auth::AuthRequirement;
use super::menu::MenuState;
use super::session::UserProfile;
use crate::config::NavEntry;
use crate::util::gate::Gate;
use crate::util::links::{LOGOUT_HREF, login_href, signup_href};

/// A navigation link with its active flag resolved against the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Resolve active flags. An entry is active only on an exact path match.
pub fn nav_items(entries: &[NavEntry], path: &str) -> Vec<NavItem> {
    entries
        .iter()
        .map(|e| NavItem { label: e.label, href: e.href, active: e.href == path })
        .collect()
}

/// An action link inside the user menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub href: String,
}

/// User menu variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserMenuView {
    /// Identity plus account actions.
    Authenticated { profile: UserProfile, actions: Vec<MenuLink> },
    /// Login and signup, both returning to the current path.
    Guest { links: Vec<MenuLink> },
}

impl UserMenuView {
    /// Pick the variant for a gate. `None` until the session resolves.
    pub fn for_gate(gate: &Gate, path: &str) -> Option<Self> {
        match gate {
            Gate::Pending | Gate::Redirect(_) => None,
            Gate::Guest => Some(Self::Guest {
                links: vec![
                    MenuLink { label: "Login", href: login_href(path) },
                    MenuLink { label: "Signup", href: signup_href(path) },
                ],
            }),
            Gate::Member(profile) => Some(Self::Authenticated {
                profile: profile.clone(),
                actions: vec![MenuLink { label: "Logout", href: LOGOUT_HREF.to_owned() }],
            }),
        }
    }

    pub fn links(&self) -> &[MenuLink] {
        match self {
            Self::Authenticated { actions, .. } => actions,
            Self::Guest { links } => links,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { profile, .. } => Some(profile),
            Self::Guest { .. } => None,
        }
    }
}

/// Where a piece of the shell is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Desktop,
    Mobile,
}

/// Everything the shell renders for one pass, minus static chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellFrame {
    /// Shared by the desktop nav and the mobile nav.
    pub nav: Option<Vec<NavItem>>,
    /// Shared by the desktop and mobile user menus.
    pub user_menu: Option<UserMenuView>,
    /// Whether the mobile menu button and panel exist.
    pub mobile_controls: bool,
    /// Effective menu state; always closed without mobile controls.
    pub menu: MenuState,
    /// Whether page content renders inside `<main>`.
    pub show_content: bool,
}

impl ShellFrame {
    pub fn compose(
        gate: &Gate,
        requirement: &AuthRequirement,
        entries: &[NavEntry],
        path: &str,
        menu: MenuState,
    ) -> Self {
        let resolved = gate.is_resolved();
        let show_content = match gate {
            Gate::Member(_) | Gate::Guest => true,
            Gate::Pending => !requirement.required,
            Gate::Redirect(_) => false,
        };

        Self {
            nav: resolved.then(|| nav_items(entries, path)),
            user_menu: UserMenuView::for_gate(gate, path),
            mobile_controls: resolved,
            menu: if resolved { menu } else { MenuState::Closed },
            show_content,
        }
    }

    pub fn panel_visible(&self) -> bool {
        self.mobile_controls && self.menu.is_open()
    }
}
