//! Product logo linking to the shell's home route.

use leptos::prelude::*;

use crate::config::PRODUCT_NAME;

const LOGO_SRC: &str = "/images/logo.svg";

/// Logo mark, optionally followed by the product name.
///
/// Carries `data-testid="logo"` or `"logo-with-name"`; its parent is the link.
#[component]
pub fn Logo(href: &'static str, #[prop(optional)] with_name: bool) -> impl IntoView {
    let test_id = if with_name { "logo-with-name" } else { "logo" };

    view! {
        <a href=href class="logo">
            <span class="logo__mark" data-testid=test_id>
                <img class="logo__image" src=LOGO_SRC alt=PRODUCT_NAME/>
                {with_name.then(|| view! { <span class="logo__name">{PRODUCT_NAME}</span> })}
            </span>
        </a>
    }
}
