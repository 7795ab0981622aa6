//! The external backend API boundary.
//!
//! Everything this front-end knows about the backend lives here: the
//! response envelope shared by every endpoint, the typed request/response
//! bodies, and the HTTP client that speaks to the service.
//!
//! # Modules
//!
//! - [`envelope`] - The discriminated success/failure response contract
//! - [`dto`] - Request and response bodies per endpoint
//! - [`client`] - The [`client::BackendClient`] trait and its HTTP implementation

pub mod client;
pub mod dto;
pub mod envelope;
