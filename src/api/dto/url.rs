//! DTOs for the URL management endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom slug validation.
static CUSTOM_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Payload for `POST /api/v1/urls`.
///
/// Only `original_url` is mandatory; the backend generates a slug when no
/// custom one is supplied.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    /// The URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom slug (validated for length and characters).
    #[validate(length(min = 4, max = 50))]
    #[validate(regex(path = "*CUSTOM_SLUG_REGEX"))]
    pub custom_slug: Option<String>,

    /// Optional display title shown in the URL list.
    pub title: Option<String>,

    /// Optional free-form description.
    pub description: Option<String>,
}

/// A shortened link as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUrl {
    pub id: i64,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
