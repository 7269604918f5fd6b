//! Site footer with link set and copyright notice.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::config::{FooterLink, PRODUCT_NAME};

/// `© <year> GitReads`
pub fn copyright_notice(year: i32) -> String {
    format!("\u{a9} {year} {PRODUCT_NAME}")
}

/// Calendar year of the rendering environment.
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer rendered in every session state.
#[component]
pub fn Footer(links: &'static [FooterLink]) -> impl IntoView {
    let notice = copyright_notice(current_year());

    view! {
        <footer class="footer">
            <nav class="footer__links">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                class="footer-link"
                                href=link.href
                                target=link.external.then_some("_blank")
                                rel=link.external.then_some("noopener noreferrer")
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <p class="footer__copyright" data-testid="copyright">
                {notice}
            </p>
        </footer>
    }
}
