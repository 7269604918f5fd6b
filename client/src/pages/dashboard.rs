//! Signed-in pages under `/app`.
//!
//! Each route mounts its own app shell, so the session is fetched once per
//! navigation and the login redirect is evaluated per page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::shell::ShellComposer;
use crate::config::{PRODUCT_NAME, ShellConfig};
use crate::util::session::use_fetch_session;

/// App shell around a titled page section.
#[component]
fn AppPage(title: &'static str) -> impl IntoView {
    let session = use_fetch_session();

    view! {
        <Title text=format!("{title} - {PRODUCT_NAME}")/>
        <ShellComposer config=ShellConfig::app() session=session>
            <section class="page-container">
                <h1 class="page-title">{title}</h1>
            </section>
        </ShellComposer>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <AppPage title="Dashboard"/> }
}

#[component]
pub fn BooksPage() -> impl IntoView {
    view! { <AppPage title="Books"/> }
}

#[component]
pub fn LibrariesPage() -> impl IntoView {
    view! { <AppPage title="Libraries"/> }
}
