//! Shell composer: header, mobile panel, main area and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand the composer their `ShellConfig` and the session signal from
//! `use_fetch_session`. The composer owns the mobile menu state, installs the
//! login redirect, and renders a `ShellFrame` recomputed from those inputs.
//! Logo and footer are static chrome and render in every state.

#[cfg(all(test, feature = "ssr"))]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::logo::Logo;
use crate::components::nav::{MenuButton, MenuContainer, Nav};
use crate::components::user_menu::UserMenu;
use crate::config::ShellConfig;
use crate::state::menu::MenuState;
use crate::state::session::SessionState;
use crate::state::shell::{Placement, ShellFrame};
use crate::util::auth::{assign_location, install_login_redirect};
use crate::util::gate::resolve;

/// Session-gated application shell.
///
/// `navigate` replaces the default full-page redirect, e.g. for embedding.
#[component]
pub fn ShellComposer(
    config: ShellConfig,
    session: Signal<SessionState>,
    #[prop(optional)] navigate: Option<Callback<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    let ShellConfig { logo_href, logo_with_name, nav, footer, requirement } = config;

    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());

    let menu = RwSignal::new(MenuState::default());

    // Drop back to closed whenever the session returns to loading.
    Effect::new(move || {
        let next = session.with(|s| menu.get_untracked().reconciled(s));
        if next != menu.get_untracked() {
            menu.set(next);
        }
    });

    let redirect = move |href: &str| match &navigate {
        Some(cb) => cb.run(href.to_owned()),
        None => assign_location(href),
    };
    install_login_redirect(session, requirement.clone(), path, redirect);

    let frame = Memo::new(move |_| {
        let path = path.get();
        let gate = session.with(|s| resolve(s, &requirement, &path));
        ShellFrame::compose(&gate, &requirement, nav, &path, menu.get())
    });

    let nav_items = Memo::new(move |_| frame.with(|f| f.nav.clone()));
    let user_menu = Memo::new(move |_| frame.with(|f| f.user_menu.clone()));
    let mobile_controls = Memo::new(move |_| frame.with(|f| f.mobile_controls));
    let show_content = Memo::new(move |_| frame.with(|f| f.show_content));
    let menu_open = Signal::derive(move || frame.with(|f| f.menu.is_open()));
    let panel_visible = Signal::derive(move || frame.with(ShellFrame::panel_visible));

    let on_toggle = Callback::new(move |()| menu.update(|m| *m = m.toggled()));

    view! {
        <div class="shell">
            <header class="shell__header">
                <div class="shell__bar">
                    <div class="shell__brand">
                        <Logo href=logo_href with_name=logo_with_name/>
                        {move || {
                            nav_items
                                .get()
                                .map(|items| view! { <Nav items=items placement=Placement::Desktop/> })
                        }}
                    </div>
                    <div class="shell__menu-toggle">
                        <Show when=move || mobile_controls.get()>
                            <MenuButton open=menu_open on_toggle=on_toggle/>
                        </Show>
                    </div>
                    {move || {
                        user_menu
                            .get()
                            .map(|menu| {
                                view! {
                                    <div class="shell__user">
                                        <UserMenu menu=menu placement=Placement::Desktop/>
                                    </div>
                                }
                            })
                    }}
                </div>
            </header>

            <Show when=move || mobile_controls.get()>
                <MenuContainer visible=panel_visible>
                    {move || {
                        nav_items
                            .get()
                            .map(|items| view! { <Nav items=items placement=Placement::Mobile/> })
                    }}
                    {move || {
                        user_menu
                            .get()
                            .map(|menu| view! { <UserMenu menu=menu placement=Placement::Mobile/> })
                    }}
                </MenuContainer>
            </Show>

            <main class="shell__main">
                <Show when=move || show_content.get()>{children()}</Show>
            </main>

            <Footer links=footer/>
        </div>
    }
}
