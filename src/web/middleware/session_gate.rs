//! Cookie-based gate for the dashboard routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::web::session;

/// Redirects requests without a session cookie to the login page.
///
/// # Authentication Flow
///
/// 1. Extract the `auth_token` cookie from the request
/// 2. Present and non-empty: continue to the handler
/// 3. Missing or empty: redirect to `/login`
///
/// The token is *not* verified here; verification belongs to the backend,
/// which rejects a stale token the moment it is presented on a real call.
/// A redirect beats a `401` in a browser context.
pub async fn layer(req: Request, next: Next) -> Result<Response, Redirect> {
    match session::token_from_headers(req.headers()) {
        Some(_) => Ok(next.run(req).await),
        None => Err(Redirect::to("/login")),
    }
}
