//! Application layer: form input, validation rules, and action handlers.
//!
//! This layer owns the form-submission contract. It depends on the
//! [`api`](crate::api) boundary but knows nothing about HTTP routing or
//! templates, so every rule and action is testable with a mock backend.
//!
//! # Modules
//!
//! - [`form`] - [`form::FormSubmission`] and [`form::ActionResult`]
//! - [`rules`] - Pure per-form validation functions
//! - [`actions`] - One handler per form, gluing rules to the backend

pub mod actions;
pub mod form;
pub mod rules;
