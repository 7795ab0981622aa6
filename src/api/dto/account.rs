//! DTOs for the account settings endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for `PUT /api/v1/users/profile`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// The stored profile, echoed back after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// Payload for `PUT /api/v1/users/preferences`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    #[validate(length(min = 1, message = "Default domain must not be empty"))]
    pub default_domain: String,

    pub email_notifications: bool,
}

/// The stored preferences, echoed back after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub default_domain: String,
    pub email_notifications: bool,
}

/// Payload for `POST /api/v1/accounts/change-password`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password must not be empty"))]
    pub current_password: String,

    #[validate(length(min = 8, max = 20, message = "Password must be between 8 and 20 characters"))]
    pub new_password: String,
}

/// Acknowledgement of a completed password change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChanged {
    pub changed_at: DateTime<Utc>,
}
