//! # devicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/device-groups`, `/device-groups/{id}/devices`,
//!   `/health`, `/login`)
//! - Extract and validate pagination parameters, path ids and request bodies
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map domain types into wire DTOs (`camelCase`) and errors into status codes
//! - Apply the process-wide CORS policy and request tracing
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits and services) and `devicehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dto;
pub mod error;
pub mod router;
pub mod state;
