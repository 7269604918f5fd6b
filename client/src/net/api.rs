//! REST helpers for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the session fetch is unavailable; shells render the
//! loading skeleton until the browser takes over.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`SessionError`]; the session provider maps every
//! error to an absent session so the shell degrades to the guest view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SessionUser;

/// Profile endpoint of the auth backend.
pub const SESSION_ENDPOINT: &str = "/api/auth/me";

/// Why a session fetch produced no answer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session request failed: {0}")]
    Transport(String),
    #[error("session request returned status {0}")]
    Status(u16),
    #[error("malformed session payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("session fetch is only available in the browser")]
    Unavailable,
}

/// Whether a response status carries a profile body.
///
/// `401`, `403` and `204` are the backend's ways of saying "no session".
#[cfg(any(test, feature = "hydrate"))]
fn session_expected(status: u16) -> Result<bool, SessionError> {
    match status {
        200 => Ok(true),
        204 | 401 | 403 => Ok(false),
        other => Err(SessionError::Status(other)),
    }
}

/// Decode a `200` body. An empty body or `null` means no session.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session_body(body: &str) -> Result<Option<SessionUser>, SessionError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<SessionUser>>(body)?)
}

/// Fetch the current visitor's profile from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error on transport failure, an unexpected status, or a body
/// that is not a profile.
pub async fn fetch_session() -> Result<Option<SessionUser>, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        if !session_expected(resp.status())? {
            return Ok(None);
        }
        let body = resp.text().await.map_err(|e| SessionError::Transport(e.to_string()))?;
        parse_session_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SessionError::Unavailable)
    }
}
