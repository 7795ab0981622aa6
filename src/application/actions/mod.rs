//! Action handlers, one per user-facing form.
//!
//! Every handler follows the same linear flow: validate the submission,
//! make at most one backend call when it is valid, and map the outcome to
//! an [`ActionResult`](crate::application::form::ActionResult). Invalid
//! input never reaches the network, and nothing is retried.
//!
//! # Modules
//!
//! - [`login`] - Sign-in form
//! - [`register`] - Account creation form
//! - [`create_url`] - New short URL form
//! - [`settings`] - Profile, preferences, and password forms

pub mod create_url;
pub mod login;
pub mod register;
pub mod settings;

use crate::api::envelope::ApiError;
use crate::application::form::ActionResult;

/// Surfaces a failure envelope as an inline message.
///
/// The first error's message wins; `fallback` covers the (unreachable by
/// construction) empty list and keeps the arm total.
fn surface_failure(errors: Vec<ApiError>, fallback: &str) -> ActionResult {
    let message = errors
        .into_iter()
        .next()
        .map(|e| e.error_message)
        .unwrap_or_else(|| fallback.to_string());
    ActionResult::failure(message)
}
