//! Open/closed state of the collapsible mobile panel.
//!
//! DESIGN
//! ======
//! Owned by the shell's menu controller only. The session can force it closed
//! but never opens it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::session::SessionState;

/// Mobile menu state. Starts closed on every shell mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The single user action: flip between closed and open.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Force the menu closed while the session is loading.
    #[must_use]
    pub fn reconciled(self, session: &SessionState) -> Self {
        if session.is_loading() { Self::Closed } else { self }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
