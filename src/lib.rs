//! # Short URL Admin
//!
//! Administrative web front-end for the Short URL service, built with Axum
//! and Askama. Landing page, authentication forms, and a dashboard for
//! managing shortened links; every piece of real work (authentication,
//! persistence, shortening, analytics) is delegated to the backend API.
//!
//! ## Architecture
//!
//! - **API Layer** ([`api`]) - The backend boundary: response envelope,
//!   DTOs, and the HTTP client behind the [`api::client::BackendClient`]
//!   trait
//! - **Application Layer** ([`application`]) - Form submissions, per-form
//!   validation rules, and the action handlers that glue them to the
//!   backend
//! - **Web Layer** ([`web`]) - Askama-rendered pages, form POST handlers,
//!   session cookies, and middleware
//!
//! ## The form contract
//!
//! Every form follows one pattern: the web handler parses the body into a
//! [`application::form::FormSubmission`], the action validates it and makes
//! at most one backend call, and the resulting
//! [`application::form::ActionResult`] either navigates away (success) or
//! re-renders the page with an inline message (failure). The backend's
//! replies all share the [`api::envelope::ApiResponse`] envelope, whose
//! success/failure invariant holds by construction.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the front-end at the backend API
//! export BACKEND_API_URL="http://localhost:8080"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::client::{BackendClient, ClientError, HttpBackendClient};
    pub use crate::api::dto::auth::SessionTokens;
    pub use crate::api::envelope::{ApiError, ApiResponse, ContractViolation};
    pub use crate::application::form::{ActionResult, FormSubmission};
    pub use crate::state::AppState;
}
