//! Page rendering and form submission handlers.
//!
//! GET handlers render Askama templates; POST handlers run the matching
//! action and translate its [`ActionResult`] into either a redirect (with
//! session cookies when the action established one) or a re-rendered page
//! carrying the inline message.

mod analytics;
mod auth;
mod dashboard;
mod landing;
mod settings;
mod urls;

pub use analytics::analytics_handler;
pub use auth::{login_page, login_submit, logout_handler, register_page, register_submit};
pub use dashboard::dashboard_handler;
pub use landing::landing_handler;
pub use settings::{settings_page, settings_submit};
pub use urls::{url_detail_handler, url_new_page, url_new_submit, urls_handler};

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};

use crate::api::dto::auth::SessionTokens;
use crate::application::form::ActionResult;
use crate::web::session;

/// Builds the redirect response for a successful action.
///
/// Session-establishing actions get their token pair appended as cookies.
fn redirect_response(to: &str, session: Option<&SessionTokens>, secure: bool) -> Response {
    let mut response = Redirect::to(to).into_response();

    if let Some(session) = session {
        for cookie in session::session_cookies(session, secure) {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
    }

    response
}

/// Resolves an [`ActionResult`] for forms that navigate on success.
///
/// `render` re-renders the page with the inline message for both failure
/// and (for these forms unreachable) in-place success results.
fn respond(
    result: ActionResult,
    secure: bool,
    render: impl FnOnce(String) -> Response,
) -> Response {
    match result {
        ActionResult::Redirect { to, session } => {
            redirect_response(&to, session.as_ref(), secure)
        }
        ActionResult::Failure { error: message } | ActionResult::Success { message } => {
            render(message)
        }
    }
}
