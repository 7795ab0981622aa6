//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    analytics_handler, dashboard_handler, landing_handler, login_page, login_submit,
    logout_handler, register_page, register_submit, settings_page, settings_submit,
    url_detail_handler, url_new_page, url_new_submit, urls_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes: landing page and the auth forms.
///
/// # Endpoints
///
/// - `GET  /` - Landing page
/// - `GET  /login` / `POST /login` - Sign-in form
/// - `GET  /register` / `POST /register` - Account creation form
/// - `POST /logout` - Clears the session cookies
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/login", get(login_page).post(login_submit))
        .route("/register", get(register_page).post(register_submit))
        .route("/logout", post(logout_handler))
}

/// Dashboard routes, gated by the session cookie.
///
/// Mounted under `/dashboard`; protected via
/// [`crate::web::middleware::session_gate`].
///
/// # Endpoints
///
/// - `GET /` - Overview with placeholder statistics
/// - `GET /urls` - Link list
/// - `GET /urls/new` / `POST /urls/new` - New short URL form
/// - `GET /urls/{id}` - Single link detail
/// - `GET /analytics` - Traffic breakdown
/// - `GET /settings` / `POST /settings` - Profile, preferences, password
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/urls", get(urls_handler))
        .route("/urls/new", get(url_new_page).post(url_new_submit))
        .route("/urls/{id}", get(url_detail_handler))
        .route("/analytics", get(analytics_handler))
        .route("/settings", get(settings_page).post(settings_submit))
}
