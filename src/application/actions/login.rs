//! Sign-in action.

use crate::api::client::BackendClient;
use crate::api::dto::auth::LoginRequest;
use crate::application::actions::surface_failure;
use crate::application::form::{ActionResult, FormSubmission};
use crate::application::rules;

/// Where a fresh session lands.
pub const DASHBOARD_LOCATION: &str = "/dashboard";

/// Shown when the backend cannot be reached or replies unintelligibly.
pub const FALLBACK_MESSAGE: &str = "No se pudo iniciar sesión. Inténtalo de nuevo.";

/// Handles a login submission.
///
/// Valid credentials trigger exactly one `login` call; the success reply's
/// token pair rides along with the redirect so the web layer can set the
/// session cookies.
pub async fn run(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::login(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = LoginRequest {
        email: fields.email,
        password: fields.password,
    };

    match backend.login(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(session) => ActionResult::redirect_with_session(DASHBOARD_LOCATION, session),
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Login call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}
