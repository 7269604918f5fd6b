//! Static shell configuration: route tables, footer links, auth requirement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each shell variant is declared here once and handed to `ShellComposer`.
//! Desktop and mobile navigation both render from the same `nav` slice.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::auth::AuthRequirement;
use crate::util::links::LOGIN_HREF;

pub const PRODUCT_NAME: &str = "GitReads";
pub const HOME_ROUTE: &str = "/";
pub const DASHBOARD_ROUTE: &str = "/app";

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// One footer link. External links open in a new tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub const HOME_NAV: &[NavEntry] = &[NavEntry { label: "App", href: DASHBOARD_ROUTE }];

pub const APP_NAV: &[NavEntry] = &[
    NavEntry { label: "Dashboard", href: DASHBOARD_ROUTE },
    NavEntry { label: "Books", href: "/app/books" },
    NavEntry { label: "Libraries", href: "/app/libraries" },
];

const GITHUB_LINK: FooterLink = FooterLink { label: "GitHub", href: "https://github.com/gitreads", external: true };
const ABOUT_LINK: FooterLink = FooterLink { label: "About", href: "https://danillouz.dev", external: true };

pub const HOME_FOOTER: &[FooterLink] = &[GITHUB_LINK, ABOUT_LINK];

pub const APP_FOOTER: &[FooterLink] = &[
    FooterLink { label: "Home", href: HOME_ROUTE, external: false },
    GITHUB_LINK,
    ABOUT_LINK,
];

/// Everything that distinguishes one shell variant from another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub logo_href: &'static str,
    pub logo_with_name: bool,
    pub nav: &'static [NavEntry],
    pub footer: &'static [FooterLink],
    pub requirement: AuthRequirement,
}

impl ShellConfig {
    /// Public marketing shell mounted at `/`.
    pub fn home() -> Self {
        Self {
            logo_href: HOME_ROUTE,
            logo_with_name: true,
            nav: HOME_NAV,
            footer: HOME_FOOTER,
            requirement: AuthRequirement::public(),
        }
    }

    /// Signed-in application shell mounted under `/app`.
    pub fn app() -> Self {
        Self {
            logo_href: DASHBOARD_ROUTE,
            logo_with_name: false,
            nav: APP_NAV,
            footer: APP_FOOTER,
            requirement: AuthRequirement::login_required(LOGIN_HREF),
        }
    }
}
