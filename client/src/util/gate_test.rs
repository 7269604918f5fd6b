use super::*;

fn ada() -> UserProfile {
    UserProfile {
        avatar_url: "/a.png".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

fn protected() -> AuthRequirement {
    AuthRequirement::login_required("/api/auth/login")
}

// =============================================================
// resolve
// =============================================================

#[test]
fn loading_is_pending_for_every_requirement() {
    assert_eq!(resolve(&SessionState::Loading, &protected(), "/app"), Gate::Pending);
    assert_eq!(resolve(&SessionState::Loading, &AuthRequirement::public(), "/"), Gate::Pending);
}

#[test]
fn absent_on_protected_page_redirects_with_return_path() {
    assert_eq!(
        resolve(&SessionState::Absent, &protected(), "/app"),
        Gate::Redirect("/api/auth/login?redirectTo=%2Fapp".to_owned())
    );
}

#[test]
fn absent_on_public_page_is_guest() {
    assert_eq!(resolve(&SessionState::Absent, &AuthRequirement::public(), "/"), Gate::Guest);
}

#[test]
fn present_is_member_regardless_of_requirement() {
    let session = SessionState::Present(ada());
    assert_eq!(resolve(&session, &protected(), "/app"), Gate::Member(ada()));
    assert_eq!(resolve(&session, &AuthRequirement::public(), "/"), Gate::Member(ada()));
}

#[test]
fn only_guest_and_member_are_resolved() {
    assert!(!Gate::Pending.is_resolved());
    assert!(!Gate::Redirect("/x".to_owned()).is_resolved());
    assert!(Gate::Guest.is_resolved());
    assert!(Gate::Member(ada()).is_resolved());
}

// =============================================================
// RedirectLatch
// =============================================================

#[test]
fn latch_fires_on_loading_to_absent() {
    let mut latch = RedirectLatch::default();
    assert_eq!(latch.observe(&SessionState::Loading, &protected(), "/app"), None);
    assert_eq!(
        latch.observe(&SessionState::Absent, &protected(), "/app"),
        Some("/api/auth/login?redirectTo=%2Fapp".to_owned())
    );
}

#[test]
fn latch_fires_once_across_rerenders() {
    let mut latch = RedirectLatch::default();
    latch.observe(&SessionState::Loading, &protected(), "/app");
    let fired = (0..5)
        .filter_map(|_| latch.observe(&SessionState::Absent, &protected(), "/app"))
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn latch_does_not_fire_while_loading() {
    let mut latch = RedirectLatch::default();
    for _ in 0..3 {
        assert_eq!(latch.observe(&SessionState::Loading, &protected(), "/app"), None);
    }
}

#[test]
fn latch_fires_when_first_observation_is_absent() {
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(&SessionState::Absent, &protected(), "/app").is_some());
}

#[test]
fn latch_fires_again_after_new_loading_cycle() {
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(&SessionState::Absent, &protected(), "/app").is_some());
    assert!(latch.observe(&SessionState::Loading, &protected(), "/app").is_none());
    assert!(latch.observe(&SessionState::Absent, &protected(), "/app").is_some());
}

#[test]
fn latch_ignores_public_pages() {
    let mut latch = RedirectLatch::default();
    latch.observe(&SessionState::Loading, &AuthRequirement::public(), "/");
    assert_eq!(latch.observe(&SessionState::Absent, &AuthRequirement::public(), "/"), None);
}

#[test]
fn latch_ignores_present_to_absent() {
    let mut latch = RedirectLatch::default();
    latch.observe(&SessionState::Present(ada()), &protected(), "/app");
    assert_eq!(latch.observe(&SessionState::Absent, &protected(), "/app"), None);
}

#[test]
fn cancelled_latch_never_fires() {
    let mut latch = RedirectLatch::default();
    latch.observe(&SessionState::Loading, &protected(), "/app");
    latch.cancel();
    assert!(latch.is_cancelled());
    assert_eq!(latch.observe(&SessionState::Absent, &protected(), "/app"), None);
}
