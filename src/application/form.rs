//! Form submission input and action handler output.
//!
//! [`FormSubmission`] is the untyped field map one POST carries;
//! [`ActionResult`] is what an action handler hands back to the web layer.
//! Neither type knows about axum or HTTP: the web layer owns the
//! translation in both directions.

use serde::Deserialize;
use std::collections::HashMap;

use crate::api::dto::auth::SessionTokens;

/// The set of field values a user submitted in one request.
///
/// Keys are unique and order is irrelevant. A submission is built from the
/// urlencoded request body, consumed by exactly one action handler
/// invocation, and dropped; it is never persisted or shared across
/// requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(HashMap<String, String>);

impl FormSubmission {
    /// The raw value of `name`, if the field was submitted at all.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The value of `name`, only when it is non-blank.
    ///
    /// Browsers submit empty inputs as empty strings; a blank value is
    /// treated the same as a missing field.
    pub fn filled(&self, name: &str) -> Option<&str> {
        self.field(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// True when the field was submitted, regardless of value.
    ///
    /// Checkboxes only appear in the body when checked, so presence alone
    /// carries meaning.
    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Input the user must correct, detected before any backend call.
///
/// Carries the exact message rendered next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub(crate) String);

impl ValidationError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// What an action handler returns to the web layer.
///
/// Derived deterministically from one [`FormSubmission`] plus the outcome
/// of zero or one backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Navigate to `to`. Forms that establish a session (login, register)
    /// carry the token pair to be set as cookies on the way out.
    Redirect {
        to: String,
        session: Option<SessionTokens>,
    },

    /// Re-render the form with an inline error message. No navigation.
    Failure { error: String },

    /// Confirm in place with a success message. Used by the settings forms,
    /// which stay on the page instead of navigating.
    Success { message: String },
}

impl ActionResult {
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect {
            to: to.into(),
            session: None,
        }
    }

    pub fn redirect_with_session(to: impl Into<String>, session: SessionTokens) -> Self {
        Self::Redirect {
            to: to.into(),
            session: Some(session),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ActionResult {
    fn from(error: ValidationError) -> Self {
        Self::Failure { error: error.0 }
    }
}
