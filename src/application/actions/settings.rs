//! Settings actions: profile, preferences, and password change.
//!
//! The settings page hosts three forms posting to the same endpoint; a
//! hidden `intent` field selects which one runs. Each succeeds in place
//! with a confirmation message instead of navigating away.

use crate::api::client::BackendClient;
use crate::api::dto::account::{
    ChangePasswordRequest, UpdatePreferencesRequest, UpdateProfileRequest,
};
use crate::application::actions::surface_failure;
use crate::application::form::{ActionResult, FormSubmission};
use crate::application::rules::{self, messages};

pub const PROFILE_SAVED_MESSAGE: &str = "Perfil actualizado correctamente";
pub const PREFERENCES_SAVED_MESSAGE: &str = "Preferencias guardadas";
pub const PASSWORD_CHANGED_MESSAGE: &str = "Contraseña cambiada correctamente";

/// Shown when the backend cannot be reached or replies unintelligibly.
pub const FALLBACK_MESSAGE: &str = "No se pudieron guardar los cambios. Inténtalo de nuevo.";

/// Dispatches a settings submission by its `intent` field.
pub async fn run(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    match form.field("intent") {
        Some("profile") => update_profile(backend, form).await,
        Some("preferences") => update_preferences(backend, form).await,
        Some("password") => change_password(backend, form).await,
        _ => ActionResult::failure(messages::UNKNOWN_INTENT),
    }
}

async fn update_profile(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::profile(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = UpdateProfileRequest {
        name: fields.name,
        email: fields.email,
    };

    match backend.update_profile(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(_) => ActionResult::success(PROFILE_SAVED_MESSAGE),
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Profile update call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}

async fn update_preferences(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::preferences(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = UpdatePreferencesRequest {
        default_domain: fields.default_domain,
        email_notifications: fields.email_notifications,
    };

    match backend.update_preferences(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(_) => ActionResult::success(PREFERENCES_SAVED_MESSAGE),
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Preferences update call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}

async fn change_password(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::change_password(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = ChangePasswordRequest {
        current_password: fields.current_password,
        new_password: fields.new_password,
    };

    match backend.change_password(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(_) => ActionResult::success(PASSWORD_CHANGED_MESSAGE),
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Password change call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}
