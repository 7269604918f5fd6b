//! Public landing page at `/`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::shell::ShellComposer;
use crate::config::{DASHBOARD_ROUTE, PRODUCT_NAME, ShellConfig};
use crate::util::session::use_fetch_session;

/// Landing page in the public shell. The hero renders in every session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_fetch_session();

    view! {
        <Title text=PRODUCT_NAME/>
        <ShellComposer config=ShellConfig::home() session=session>
            <section class="hero" data-testid="hero">
                <h1 class="hero__title">"Keep track of what you read"</h1>
                <a class="hero__cta" href=DASHBOARD_ROUTE>
                    "Git started"
                </a>
            </section>
        </ShellComposer>
    }
}
