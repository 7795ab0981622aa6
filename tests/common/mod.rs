#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use shorturl_admin::api::client::{BackendClient, ClientError};
use shorturl_admin::api::dto::account::{
    ChangePasswordRequest, PasswordChanged, Preferences, Profile, UpdatePreferencesRequest,
    UpdateProfileRequest,
};
use shorturl_admin::api::dto::auth::{LoginRequest, RegisterRequest, SessionTokens};
use shorturl_admin::api::dto::url::{CreateUrlRequest, CreatedUrl};
use shorturl_admin::api::envelope::{ApiError, ApiResponse};
use shorturl_admin::state::AppState;
use shorturl_admin::web::middleware::session_gate;
use shorturl_admin::web::routes::{dashboard_routes, public_routes};

/// What the stub backend answers, regardless of endpoint.
#[derive(Clone)]
pub enum StubReply {
    /// A success envelope with a canned payload.
    Success,
    /// A failure envelope carrying one error with this message.
    Failure(&'static str),
    /// A `ClientError`, as if the reply were not a valid envelope.
    Broken,
}

/// Backend double that counts calls and returns a canned reply.
pub struct StubBackend {
    reply: StubReply,
    calls: AtomicUsize,
}

impl StubBackend {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of backend calls made through this stub.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T>(&self, success_payload: T) -> Result<ApiResponse<T>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.reply {
            StubReply::Success => Ok(ApiResponse::success(success_payload)),
            StubReply::Failure(message) => Ok(ApiResponse::failure(vec![ApiError::new(
                10000, message, "stub",
            )])
            .expect("non-empty error list")),
            StubReply::Broken => Err(ClientError::Decode {
                status: reqwest::StatusCode::BAD_GATEWAY,
                source: serde_json::from_str::<i32>("garbage").unwrap_err(),
            }),
        }
    }
}

pub fn session_tokens() -> SessionTokens {
    SessionTokens {
        token: "stub-access-token".into(),
        refresh_token: "stub-refresh-token".into(),
    }
}

#[async_trait]
impl BackendClient for StubBackend {
    async fn login(
        &self,
        _request: &LoginRequest,
    ) -> Result<ApiResponse<SessionTokens>, ClientError> {
        self.answer(session_tokens())
    }

    async fn register(
        &self,
        _request: &RegisterRequest,
    ) -> Result<ApiResponse<SessionTokens>, ClientError> {
        self.answer(session_tokens())
    }

    async fn create_url(
        &self,
        request: &CreateUrlRequest,
    ) -> Result<ApiResponse<CreatedUrl>, ClientError> {
        self.answer(CreatedUrl {
            id: 1,
            short_url: "https://short.ly/abc123".into(),
            original_url: request.original_url.clone(),
            created_at: Utc::now(),
        })
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<Profile>, ClientError> {
        self.answer(Profile {
            name: request.name.clone(),
            email: request.email.clone(),
        })
    }

    async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Result<ApiResponse<Preferences>, ClientError> {
        self.answer(Preferences {
            default_domain: request.default_domain.clone(),
            email_notifications: request.email_notifications,
        })
    }

    async fn change_password(
        &self,
        _request: &ChangePasswordRequest,
    ) -> Result<ApiResponse<PasswordChanged>, ClientError> {
        self.answer(PasswordChanged {
            changed_at: Utc::now(),
        })
    }
}

/// Builds the web app the way the router does, minus rate limiting (which
/// needs a real socket for peer addresses).
pub fn test_app(backend: Arc<StubBackend>) -> Router {
    let state = AppState::new(backend, false);

    let dashboard =
        dashboard_routes().route_layer(axum::middleware::from_fn(session_gate::layer));

    Router::new()
        .merge(public_routes())
        .nest("/dashboard", dashboard)
        .with_state(state)
}

/// `Cookie` header value for a signed-in request.
pub const SESSION_COOKIE: &str = "auth_token=stub-access-token";
