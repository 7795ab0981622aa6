//! Settings page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::application::actions;
use crate::application::form::{ActionResult, FormSubmission};
use crate::state::AppState;
use crate::web::handlers::redirect_response;

/// Template for the settings page.
///
/// Renders `templates/settings.html` with the profile, preferences, and
/// password forms. Settings confirm in place, so the template carries both
/// an error and a success slot.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    error: Option<String>,
    success: Option<String>,
}

/// Renders the settings page.
///
/// # Endpoint
///
/// `GET /dashboard/settings`
pub async fn settings_page() -> impl IntoResponse {
    SettingsTemplate {
        error: None,
        success: None,
    }
}

/// Handles a settings submission (any of the three intents).
///
/// # Endpoint
///
/// `POST /dashboard/settings`
pub async fn settings_submit(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Response {
    match actions::settings::run(state.backend.as_ref(), &form).await {
        ActionResult::Success { message } => SettingsTemplate {
            error: None,
            success: Some(message),
        }
        .into_response(),
        ActionResult::Failure { error } => SettingsTemplate {
            error: Some(error),
            success: None,
        }
        .into_response(),
        ActionResult::Redirect { to, session } => {
            redirect_response(&to, session.as_ref(), state.cookie_secure)
        }
    }
}
