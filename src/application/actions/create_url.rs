//! New short URL action.

use crate::api::client::BackendClient;
use crate::api::dto::url::CreateUrlRequest;
use crate::application::actions::surface_failure;
use crate::application::form::{ActionResult, FormSubmission};
use crate::application::rules;

/// After creating a link the user returns to the list.
pub const URL_LIST_LOCATION: &str = "/dashboard/urls";

/// Shown when the backend cannot be reached or replies unintelligibly.
pub const FALLBACK_MESSAGE: &str = "No se pudo crear la URL. Inténtalo de nuevo.";

/// Handles a new-URL submission.
pub async fn run(backend: &dyn BackendClient, form: &FormSubmission) -> ActionResult {
    let fields = match rules::new_url(form) {
        Ok(fields) => fields,
        Err(invalid) => return invalid.into(),
    };

    let request = CreateUrlRequest {
        original_url: fields.original_url,
        custom_slug: fields.custom_slug,
        title: fields.title,
        description: fields.description,
    };

    match backend.create_url(&request).await {
        Ok(reply) => match reply.into_result() {
            Ok(created) => {
                tracing::info!(short_url = %created.short_url, "Short URL created");
                ActionResult::redirect(URL_LIST_LOCATION)
            }
            Err(errors) => surface_failure(errors, FALLBACK_MESSAGE),
        },
        Err(error) => {
            tracing::error!(%error, "Create-URL call to backend failed");
            ActionResult::failure(FALLBACK_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockBackendClient;
    use crate::api::dto::url::CreatedUrl;
    use crate::api::envelope::{ApiError, ApiResponse};
    use crate::application::rules::messages;
    use chrono::Utc;

    fn form(pairs: &[(&str, &str)]) -> FormSubmission {
        pairs.iter().copied().collect()
    }

    fn created() -> CreatedUrl {
        CreatedUrl {
            id: 1,
            short_url: "https://short.ly/abc123".into(),
            original_url: "https://example.com/page".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_valid_url_redirects_to_the_list() {
        let mut backend = MockBackendClient::new();
        backend
            .expect_create_url()
            .withf(|req| req.original_url == "https://example.com/page" && req.custom_slug.is_none())
            .times(1)
            .returning(|_| Ok(ApiResponse::success(created())));

        let result = run(&backend, &form(&[("originalUrl", "https://example.com/page")])).await;

        assert_eq!(result, ActionResult::redirect(URL_LIST_LOCATION));
    }

    #[tokio::test]
    async fn test_malformed_url_fails_without_backend_call() {
        let backend = MockBackendClient::new();

        let result = run(&backend, &form(&[("originalUrl", "not-a-url")])).await;

        assert_eq!(result, ActionResult::failure(messages::ORIGINAL_URL_INVALID));
    }

    #[tokio::test]
    async fn test_missing_url_fails_without_backend_call() {
        let backend = MockBackendClient::new();

        let result = run(&backend, &form(&[])).await;

        assert_eq!(result, ActionResult::failure(messages::ORIGINAL_URL_REQUIRED));
    }

    #[tokio::test]
    async fn test_optional_fields_are_forwarded() {
        let mut backend = MockBackendClient::new();
        backend
            .expect_create_url()
            .withf(|req| {
                req.custom_slug.as_deref() == Some("mi-enlace")
                    && req.title.as_deref() == Some("Mi página")
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::success(created())));

        let result = run(
            &backend,
            &form(&[
                ("originalUrl", "https://example.com/page"),
                ("customSlug", "mi-enlace"),
                ("title", "Mi página"),
            ]),
        )
        .await;

        assert_eq!(result, ActionResult::redirect(URL_LIST_LOCATION));
    }

    #[tokio::test]
    async fn test_slug_conflict_surfaces_backend_message() {
        let mut backend = MockBackendClient::new();
        backend.expect_create_url().times(1).returning(|_| {
            Ok(ApiResponse::failure(vec![ApiError::new(
                10000,
                "El slug ya está en uso",
                "customAlias",
            )])
            .unwrap())
        });

        let result = run(
            &backend,
            &form(&[
                ("originalUrl", "https://example.com/page"),
                ("customSlug", "ocupado"),
            ]),
        )
        .await;

        assert_eq!(result, ActionResult::failure("El slug ya está en uso"));
    }
}
