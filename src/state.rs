//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::api::client::BackendClient;

/// State shared by all web handlers.
///
/// Holds only immutable, request-independent values; action handler
/// invocations share nothing mutable with each other.
#[derive(Clone)]
pub struct AppState {
    /// Client for the backend API, behind the trait so tests can swap it.
    pub backend: Arc<dyn BackendClient>,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendClient>, cookie_secure: bool) -> Self {
        Self {
            backend,
            cookie_secure,
        }
    }
}
