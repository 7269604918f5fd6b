use super::*;
use crate::state::session::UserProfile;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

fn ada() -> UserProfile {
    UserProfile {
        avatar_url: "/a.png".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

fn render(config: ShellConfig, session: SessionState, path: &str) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        let session: Signal<SessionState> = RwSignal::new(session).into();
        view! {
            <Router>
                <ShellComposer config=config session=session>
                    <p data-testid="content">"Page"</p>
                </ShellComposer>
            </Router>
        }
        .to_html()
    })
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// `href` values inside the first `<nav>` carrying `class`.
fn nav_hrefs(html: &str, class: &str) -> Vec<String> {
    let Some(start) = html.find(class) else {
        return Vec::new();
    };
    let section = &html[start..];
    let section = &section[..section.find("</nav>").unwrap_or(section.len())];
    section
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_owned)
        .collect()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_renders_skeleton_only() {
    let html = render(ShellConfig::app(), SessionState::Loading, "/app");
    assert_eq!(count(&html, "class=\"menu-button\""), 0);
    assert_eq!(count(&html, "nav--desktop"), 0);
    assert_eq!(count(&html, "mobile-menu"), 0);
    assert_eq!(count(&html, "user-menu"), 0);
    assert_eq!(count(&html, "data-testid=\"content\""), 0);
    assert_eq!(count(&html, "data-testid=\"logo\""), 1);
    assert_eq!(count(&html, "data-testid=\"copyright\""), 1);
}

#[test]
fn loading_public_page_keeps_content() {
    let html = render(ShellConfig::home(), SessionState::Loading, "/");
    assert_eq!(count(&html, "data-testid=\"content\""), 1);
    assert_eq!(count(&html, "class=\"menu-button\""), 0);
    assert_eq!(count(&html, "/api/auth/login"), 0);
}

// =============================================================
// Present
// =============================================================

#[test]
fn member_on_app_renders_two_identity_cards() {
    let html = render(ShellConfig::app(), SessionState::Present(ada()), "/app");
    assert_eq!(count(&html, "data-testid=\"avatar\""), 2);
    assert_eq!(count(&html, "src=\"/a.png\""), 2);
    assert_eq!(count(&html, "ada@example.com"), 2);
    assert_eq!(count(&html, "href=\"/api/auth/logout\""), 2);
    assert_eq!(count(&html, "/api/auth/login"), 0);
    assert_eq!(count(&html, "class=\"menu-button\""), 1);
    assert_eq!(count(&html, "data-testid=\"content\""), 1);
}

#[test]
fn member_nav_marks_dashboard_active_in_both_placements() {
    let html = render(ShellConfig::app(), SessionState::Present(ada()), "/app");
    assert_eq!(count(&html, "aria-current=\"page\""), 2);
}

#[test]
fn desktop_and_mobile_nav_render_the_same_links() {
    let html = render(ShellConfig::app(), SessionState::Present(ada()), "/app/books");
    let desktop = nav_hrefs(&html, "nav nav--desktop");
    let mobile = nav_hrefs(&html, "nav nav--mobile");
    assert_eq!(desktop, ["/app", "/app/books", "/app/libraries"]);
    assert_eq!(desktop, mobile);
}

// =============================================================
// Absent
// =============================================================

#[test]
fn guest_on_home_renders_login_and_signup_twice() {
    let html = render(ShellConfig::home(), SessionState::Absent, "/");
    assert_eq!(count(&html, "href=\"/api/auth/login?redirectTo=%2F\""), 2);
    assert_eq!(count(&html, "signup=true"), 2);
    assert_eq!(count(&html, "data-testid=\"avatar\""), 0);
    assert_eq!(count(&html, "/api/auth/logout"), 0);
    assert_eq!(count(&html, "class=\"menu-button\""), 1);
    assert_eq!(count(&html, "data-testid=\"content\""), 1);
}

#[test]
fn guest_mobile_panel_starts_closed() {
    let html = render(ShellConfig::home(), SessionState::Absent, "/");
    assert_eq!(count(&html, "class=\"mobile-menu"), 1);
    assert_eq!(count(&html, "mobile-menu--open"), 0);
}

#[test]
fn absent_on_protected_page_renders_nothing_further() {
    let html = render(ShellConfig::app(), SessionState::Absent, "/app");
    assert_eq!(count(&html, "nav--desktop"), 0);
    assert_eq!(count(&html, "user-menu"), 0);
    assert_eq!(count(&html, "class=\"menu-button\""), 0);
    assert_eq!(count(&html, "data-testid=\"content\""), 0);
    assert_eq!(count(&html, "/api/auth/login"), 0);
    assert_eq!(count(&html, "data-testid=\"copyright\""), 1);
}

// =============================================================
// Static chrome
// =============================================================

#[test]
fn home_shell_shows_logo_with_name() {
    let html = render(ShellConfig::home(), SessionState::Absent, "/");
    assert_eq!(count(&html, "data-testid=\"logo-with-name\""), 1);
    assert_eq!(count(&html, "data-testid=\"logo\""), 0);
}

#[test]
fn footer_opens_external_links_in_new_tab() {
    let html = render(ShellConfig::home(), SessionState::Absent, "/");
    assert_eq!(count(&html, "target=\"_blank\""), 2);
    assert_eq!(count(&html, "rel=\"noopener noreferrer\""), 2);
    assert_eq!(count(&html, "href=\"https://github.com/gitreads\""), 1);
}
