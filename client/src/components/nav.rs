//! Navigation set and mobile menu chrome.
//!
//! `Nav` renders the same items inline (desktop) or stacked (mobile).
//! `MenuButton` and `MenuContainer` are the two views of the mobile menu
//! controller; they only read the menu state handed to them.

use leptos::prelude::*;

use crate::state::shell::{NavItem, Placement};

const OPEN_ICON: &str = "M4 8h16M4 16h16";
const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Ordered list of navigation links.
#[component]
pub fn Nav(items: Vec<NavItem>, placement: Placement) -> impl IntoView {
    let class = match placement {
        Placement::Desktop => "nav nav--desktop",
        Placement::Mobile => "nav nav--mobile",
    };

    view! {
        <nav class=class>
            {items
                .into_iter()
                .map(|item| view! { <NavLink item=item/> })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Single link; the active entry gets a modifier class and `aria-current`.
#[component]
pub fn NavLink(item: NavItem) -> impl IntoView {
    view! {
        <a
            href=item.href
            class="nav-link"
            class:nav-link--active=item.active
            aria-current=item.active.then_some("page")
        >
            {item.label}
        </a>
    }
}

/// Hamburger / close toggle for the mobile panel.
#[component]
pub fn MenuButton(open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="menu-button"
            aria-label=move || if open.get() { "Close menu" } else { "Open menu" }
            aria-expanded=move || if open.get() { "true" } else { "false" }
            on:click=move |_| on_toggle.run(())
        >
            <svg class="menu-button__icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="1.5"
                    d=move || if open.get() { CLOSE_ICON } else { OPEN_ICON }
                ></path>
            </svg>
        </button>
    }
}

/// Collapsible mobile panel. Stays mounted; `visible` only hides it.
#[component]
pub fn MenuContainer(visible: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="mobile-menu" class:mobile-menu--open=move || visible.get() hidden=move || !visible.get()>
            {children()}
        </div>
    }
}
