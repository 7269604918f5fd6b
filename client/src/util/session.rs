//! Session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each shell mount fetches the session once. The returned signal starts in
//! `Loading` (also what SSR renders) and is written exactly once when the
//! fetch resolves. A result arriving after unmount is dropped.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Start the session fetch for this mount and expose its state.
///
/// Server-side the fetch never runs, so SSR output is the loading skeleton
/// and matches the first client render.
pub fn use_fetch_session() -> Signal<SessionState> {
    let session = RwSignal::new(SessionState::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_session().await;
        match &result {
            Ok(Some(_)) => log::debug!("session resolved with user"),
            Ok(None) => log::debug!("session resolved without user"),
            Err(e) => log::warn!("session fetch failed, continuing as guest: {e}"),
        }
        if session.try_set(SessionState::from_fetch(result)).is_some() {
            log::debug!("shell unmounted before session resolved");
        }
    });

    session.into()
}
