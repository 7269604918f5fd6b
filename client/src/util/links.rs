//! Auth endpoint hrefs.
//!
//! The shell only builds these URLs; the endpoints live on the auth backend.
//! Query values are percent-encoded as URI components, so `/app` becomes
//! `%2Fapp` and a space becomes `%20`.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const LOGIN_HREF: &str = "/api/auth/login";
pub const LOGOUT_HREF: &str = "/api/auth/logout";

const RETURN_PARAM: &str = "redirectTo";

/// Everything but ASCII alphanumerics and `-_.!~*'()`, as `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `/api/auth/login?redirectTo=<path>`
pub fn login_href(return_to: &str) -> String {
    let path = return_path(return_to);
    with_query(LOGIN_HREF, &[(RETURN_PARAM, path.as_str())])
}

/// `/api/auth/login?signup=true&redirectTo=<path>`
pub fn signup_href(return_to: &str) -> String {
    let path = return_path(return_to);
    with_query(LOGIN_HREF, &[("signup", "true"), (RETURN_PARAM, path.as_str())])
}

/// Redirect destination for a protected page: `target` plus the return path.
pub fn redirect_href(target: &str, return_to: &str) -> String {
    let path = return_path(return_to);
    with_query(target, &[(RETURN_PARAM, path.as_str())])
}

/// Coerce a location into a same-origin absolute path.
///
/// Input is taken as-is otherwise; an already-encoded path is encoded again,
/// which round-trips to the original URL path once the backend decodes it.
pub(crate) fn return_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') && !trimmed.starts_with("//") {
        trimmed.to_owned()
    } else {
        format!("/{}", trimmed.trim_start_matches('/'))
    }
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", utf8_percent_encode(key, COMPONENT), utf8_percent_encode(value, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}
