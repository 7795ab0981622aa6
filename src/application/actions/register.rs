//! Account creation action.

use crate::api::client::BackendClient;
use crate::api::dto::auth::RegisterRequest;
use crate::application::actions::surface_failure;
use crate::application::form::{ActionResult, FormSubmission};
use crate::application::rules;

/// New accounts land on the dashboard, already signed in.
pub const DASHBOARD_LOCATION: &str = "/dashboard";

/// Shown when the backend cannot be reached or replies unintelligibly.
pub const FALLBACK_MESSAGE: &str = "No se pudo crear la cuenta. Inténtalo de nuevo.";

/// Handles a registration submission.
///
/// The confirmation password is checked locally and never sent upstream.
pub async fn run(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::register(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = RegisterRequest {
        name: fields.name,
        email: fields.email,
        password: fields.password,
    };

    match backend.register(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(session) => ActionResult::redirect_with_session(DASHBOARD_LOCATION, session),
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Signup call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockBackendClient;
    use crate::api::dto::auth::SessionTokens;
    use crate::api::envelope::{ApiError, ApiResponse};
    use crate::application::rules::messages;

    fn form(pairs: &[(&str, &str)]) -> FormSubmission {
        pairs.iter().copied().collect()
    }

    fn complete_form() -> FormSubmission {
        form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "secreta123"),
            ("confirmPassword", "secreta123"),
        ])
    }

    #[tokio::test]
    async fn test_valid_submission_registers_and_redirects() {
        let mut backend = MockBackendClient::new();
        backend
            .expect_register()
            .withf(|req| req.name == "Ana" && req.email == "ana@example.com")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::success(SessionTokens {
                    token: "access".into(),
                    refresh_token: "refresh".into(),
                }))
            });

        let result = run(&backend, &complete_form()).await;

        assert!(matches!(
            result,
            ActionResult::Redirect { to, session: Some(_) } if to == DASHBOARD_LOCATION
        ));
    }

    #[tokio::test]
    async fn test_mismatched_passwords_fail_without_backend_call() {
        let backend = MockBackendClient::new();

        let result = run(
            &backend,
            &form(&[
                ("name", "Ana"),
                ("email", "ana@example.com"),
                ("password", "secreta123"),
                ("confirmPassword", "distinta123"),
            ]),
        )
        .await;

        assert_eq!(result, ActionResult::failure(messages::PASSWORDS_DO_NOT_MATCH));
    }

    #[tokio::test]
    async fn test_missing_field_fails_without_backend_call() {
        let backend = MockBackendClient::new();

        let result = run(
            &backend,
            &form(&[("email", "ana@example.com"), ("password", "secreta123")]),
        )
        .await;

        assert_eq!(result, ActionResult::failure(messages::ALL_FIELDS_REQUIRED));
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_its_message() {
        let mut backend = MockBackendClient::new();
        backend.expect_register().times(1).returning(|_| {
            Ok(ApiResponse::failure(vec![ApiError::new(
                10000,
                "El email ya está registrado",
                "email",
            )])
            .unwrap())
        });

        let result = run(&backend, &complete_form()).await;

        assert_eq!(result, ActionResult::failure("El email ya está registrado"));
    }
}
