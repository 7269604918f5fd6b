//! User menu: authenticated identity card or guest login/signup links.

use leptos::prelude::*;

use crate::state::shell::{MenuLink, Placement, UserMenuView};

/// Render one user menu variant. Variant selection happens upstream in
/// `UserMenuView::for_gate`; this component only draws it.
#[component]
pub fn UserMenu(menu: UserMenuView, placement: Placement) -> impl IntoView {
    let class = match placement {
        Placement::Desktop => "user-menu user-menu--desktop",
        Placement::Mobile => "user-menu user-menu--mobile",
    };

    match menu {
        UserMenuView::Authenticated { profile, actions } => view! {
            <div class=class>
                <img class="user-menu__avatar" data-testid="avatar" src=profile.avatar_url alt=""/>
                <div class="user-menu__identity">
                    <span class="user-menu__name">{profile.display_name}</span>
                    <span class="user-menu__email">{profile.email}</span>
                </div>
                <MenuLinks links=actions/>
            </div>
        }
        .into_any(),
        UserMenuView::Guest { links } => view! {
            <div class=class>
                <MenuLinks links=links/>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MenuLinks(links: Vec<MenuLink>) -> impl IntoView {
    view! {
        <ul class="user-menu__links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <li>
                            <a class="user-menu__link" href=link.href>
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
