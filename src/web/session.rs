//! Session cookie plumbing.
//!
//! The backend issues a token pair on login/signup; this front-end stores
//! it in two cookies and checks only for the access token's presence when
//! gating the dashboard. Verifying the token is the backend's job.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

use crate::api::dto::auth::SessionTokens;

/// Cookie holding the access token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Cookie holding the refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Extracts the access token from a request's `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// `auth_token` pair; an empty value counts as no session.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// Builds the `Set-Cookie` values that establish a session.
///
/// Tokens with characters a header cannot carry are skipped with a
/// warning; the login simply won't stick, which beats a 500.
pub fn session_cookies(session: &SessionTokens, secure: bool) -> Vec<HeaderValue> {
    [
        (AUTH_COOKIE, session.token.as_str()),
        (REFRESH_COOKIE, session.refresh_token.as_str()),
    ]
    .into_iter()
    .filter_map(|(name, value)| set_cookie(name, value, secure))
    .collect()
}

/// Builds the `Set-Cookie` values that clear a session.
pub fn clear_session_cookies() -> Vec<HeaderValue> {
    [AUTH_COOKIE, REFRESH_COOKIE]
        .into_iter()
        .filter_map(|name| {
            HeaderValue::from_str(&format!("{name}=; Path=/; HttpOnly; Max-Age=0")).ok()
        })
        .collect()
}

fn set_cookie(name: &str, value: &str, secure: bool) -> Option<HeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    let cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax{secure_attr}");

    match HeaderValue::from_str(&cookie) {
        Ok(header) => Some(header),
        Err(_) => {
            tracing::warn!(cookie = name, "Token contains characters unfit for a cookie; skipping");
            None
        }
    }
}
