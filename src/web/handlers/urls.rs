//! URL management page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::application::actions;
use crate::application::form::FormSubmission;
use crate::state::AppState;
use crate::web::handlers::respond;

/// Template for the URL list page.
///
/// Renders `templates/urls.html` with placeholder rows.
#[derive(Template, WebTemplate)]
#[template(path = "urls.html")]
struct UrlsTemplate {}

/// Template for the new-URL form page.
#[derive(Template, WebTemplate)]
#[template(path = "url_new.html")]
struct UrlNewTemplate {
    error: Option<String>,
}

/// Template for the single-URL detail page.
#[derive(Template, WebTemplate)]
#[template(path = "url_detail.html")]
struct UrlDetailTemplate {
    id: String,
}

/// Renders the URL list.
///
/// # Endpoint
///
/// `GET /dashboard/urls`
pub async fn urls_handler() -> impl IntoResponse {
    UrlsTemplate {}
}

/// Renders the new-URL form.
///
/// # Endpoint
///
/// `GET /dashboard/urls/new`
pub async fn url_new_page() -> impl IntoResponse {
    UrlNewTemplate { error: None }
}

/// Handles a new-URL submission.
///
/// # Endpoint
///
/// `POST /dashboard/urls/new`
///
/// On success redirects back to the URL list; on failure re-renders the
/// form with the message inline.
pub async fn url_new_submit(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Response {
    let result = actions::create_url::run(state.backend.as_ref(), &form).await;

    respond(result, state.cookie_secure, |error| {
        UrlNewTemplate { error: Some(error) }.into_response()
    })
}

/// Renders the detail page for one URL.
///
/// # Endpoint
///
/// `GET /dashboard/urls/{id}`
pub async fn url_detail_handler(Path(id): Path<String>) -> impl IntoResponse {
    UrlDetailTemplate { id }
}
