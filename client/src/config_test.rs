use super::*;

#[test]
fn home_shell_is_public_with_named_logo() {
    let config = ShellConfig::home();
    assert!(!config.requirement.required);
    assert!(config.logo_with_name);
    assert_eq!(config.logo_href, "/");
    assert_eq!(config.nav, HOME_NAV);
}

#[test]
fn app_shell_requires_login() {
    let config = ShellConfig::app();
    assert!(config.requirement.required);
    assert_eq!(config.requirement.redirect_target, "/api/auth/login");
    assert_eq!(config.logo_href, "/app");
    assert!(!config.logo_with_name);
}

#[test]
fn app_nav_is_ordered_under_dashboard() {
    let hrefs: Vec<_> = APP_NAV.iter().map(|e| e.href).collect();
    assert_eq!(hrefs, ["/app", "/app/books", "/app/libraries"]);
    let labels: Vec<_> = APP_NAV.iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Dashboard", "Books", "Libraries"]);
}

#[test]
fn external_footer_links_are_flagged() {
    for link in HOME_FOOTER {
        assert!(link.external, "{} should be external", link.label);
    }
    let home = APP_FOOTER.iter().find(|l| l.label == "Home").unwrap();
    assert_eq!(home.href, "/");
    assert!(!home.external);
}
