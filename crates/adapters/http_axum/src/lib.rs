//! # eventos-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **eventos JSON resource** (`/eventos`, `/eventos/{id}`)
//! - Serve the OpenAPI document describing it (`/api-docs/openapi.json`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into HTTP responses with a stable
//!   `{"code", "error"}` error shape
//!
//! ## Dependency rule
//! Depends on `eventos-app` (for port traits and services) and `eventos-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod openapi;
pub mod router;
pub mod state;
