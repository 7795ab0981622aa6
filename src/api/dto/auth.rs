//! DTOs for the authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials posted to `POST /api/v1/auth/login`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// New-account payload for `POST /api/v1/accounts/signup`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 20, message = "Password must be between 8 and 20 characters"))]
    pub password: String,
}

/// Token pair issued when a session is established.
///
/// Returned by both login and signup; the access token goes into the
/// `auth_token` cookie, the refresh token into `refresh_token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub token: String,
    pub refresh_token: String,
}
