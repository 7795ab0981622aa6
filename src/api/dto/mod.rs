//! Data Transfer Objects for backend requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; outgoing
//! request bodies additionally carry validator derives, mirroring the
//! constraints the backend applies on its side.

pub mod account;
pub mod auth;
pub mod url;
