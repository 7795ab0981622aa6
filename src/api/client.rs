//! HTTP client for the backend API.
//!
//! The [`BackendClient`] trait is the seam between action handlers and the
//! network: handlers depend on the trait, tests substitute a mock, and
//! [`HttpBackendClient`] is the production implementation over reqwest.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use validator::Validate;

use crate::api::dto::account::{
    ChangePasswordRequest, PasswordChanged, Preferences, Profile, UpdatePreferencesRequest,
    UpdateProfileRequest,
};
use crate::api::dto::auth::{LoginRequest, RegisterRequest, SessionTokens};
use crate::api::dto::url::{CreateUrlRequest, CreatedUrl};
use crate::api::envelope::ApiResponse;

/// Failure to obtain a well-formed envelope from the backend.
///
/// Distinct from the failure *variant* of [`ApiResponse`], which is a valid
/// reply: a `ClientError` means no envelope was obtained at all.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend reply ({status}) is not a valid envelope: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("request body failed validation: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("invalid backend base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Operations the backend exposes to this front-end, one per form action.
///
/// Implementations must not retry: the action layer assumes at most one
/// upstream call per submission.
///
/// # Implementations
///
/// - [`HttpBackendClient`] - production implementation over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Authenticates a user, returning a session token pair on success.
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<SessionTokens>, ClientError>;

    /// Creates an account and signs the new user in.
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<SessionTokens>, ClientError>;

    /// Shortens a URL on behalf of the signed-in user.
    async fn create_url(
        &self,
        request: &CreateUrlRequest,
    ) -> Result<ApiResponse<CreatedUrl>, ClientError>;

    /// Replaces the user's display name and email.
    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<Profile>, ClientError>;

    /// Replaces the user's dashboard preferences.
    async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Result<ApiResponse<Preferences>, ClientError>;

    /// Changes the user's password after verifying the current one.
    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiResponse<PasswordChanged>, ClientError>;
}

const LOGIN_PATH: &str = "/api/v1/auth/login";
const SIGNUP_PATH: &str = "/api/v1/accounts/signup";
const URLS_PATH: &str = "/api/v1/urls";
const PROFILE_PATH: &str = "/api/v1/users/profile";
const PREFERENCES_PATH: &str = "/api/v1/users/preferences";
const CHANGE_PASSWORD_PATH: &str = "/api/v1/accounts/change-password";

/// Production [`BackendClient`] speaking JSON over HTTP.
///
/// The envelope is decoded from the body regardless of HTTP status: the
/// backend reports failures inside the envelope, so a 4xx with a valid
/// failure envelope is a normal reply, not a transport error.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// `timeout` bounds every request end-to-end; the action layer defines
    /// no timeout of its own.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] when `base_url` does not parse and
    /// [`ClientError::Transport`] when the underlying client cannot be
    /// built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        url::Url::parse(base_url)?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send<B, T>(
        &self,
        method: reqwest::Method,
        path: &'static str,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        B: Serialize + Validate + Sync,
        T: DeserializeOwned,
    {
        body.validate()?;

        metrics::counter!("backend_requests_total", "endpoint" => path).increment(1);

        let url = format!("{}{}", self.base_url, path);
        let reply = self.http.request(method, url).json(body).send().await?;

        let status = reply.status();
        let bytes = reply.bytes().await?;

        let envelope = serde_json::from_slice::<ApiResponse<T>>(&bytes).map_err(|source| {
            metrics::counter!("backend_contract_errors_total", "endpoint" => path).increment(1);
            tracing::error!(%status, endpoint = path, error = %source, "Backend reply violates the envelope contract");
            ClientError::Decode { status, source }
        })?;

        if !envelope.is_success() {
            metrics::counter!("backend_failures_total", "endpoint" => path).increment(1);
        }

        Ok(envelope)
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<SessionTokens>, ClientError> {
        self.send(reqwest::Method::POST, LOGIN_PATH, request).await
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<SessionTokens>, ClientError> {
        self.send(reqwest::Method::POST, SIGNUP_PATH, request).await
    }

    async fn create_url(
        &self,
        request: &CreateUrlRequest,
    ) -> Result<ApiResponse<CreatedUrl>, ClientError> {
        self.send(reqwest::Method::POST, URLS_PATH, request).await
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<Profile>, ClientError> {
        self.send(reqwest::Method::PUT, PROFILE_PATH, request).await
    }

    async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Result<ApiResponse<Preferences>, ClientError> {
        self.send(reqwest::Method::PUT, PREFERENCES_PATH, request).await
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiResponse<PasswordChanged>, ClientError> {
        self.send(reqwest::Method::POST, CHANGE_PASSWORD_PATH, request).await
    }
}
