//! Login, registration, and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::actions;
use crate::application::form::FormSubmission;
use crate::state::AppState;
use crate::web::handlers::respond;
use crate::web::session;

/// Template for the login page.
///
/// Renders `templates/login.html`; `error` appears inline above the form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Template for the registration page.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handles a login submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success redirects to the dashboard with the session cookies set; on
/// any failure re-renders the form with the message inline.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Response {
    let result = actions::login::run(state.backend.as_ref(), &form).await;

    respond(result, state.cookie_secure, |error| {
        LoginTemplate { error: Some(error) }.into_response()
    })
}

/// Renders the registration page.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate { error: None }
}

/// Handles a registration submission.
///
/// # Endpoint
///
/// `POST /register`
pub async fn register_submit(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Response {
    let result = actions::register::run(state.backend.as_ref(), &form).await;

    respond(result, state.cookie_secure, |error| {
        RegisterTemplate { error: Some(error) }.into_response()
    })
}

/// Clears the session cookies and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler() -> Response {
    let mut response = Redirect::to("/login").into_response();

    for cookie in session::clear_session_cookies() {
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    response
}
