//! # eventos-domain
//!
//! Pure domain model for the eventos resource.
//!
//! ## Responsibilities
//! - Foundational types: the [`EventoId`](id::EventoId) identifier and the
//!   error conventions shared by every layer
//! - Define the **Evento** record (an event with a cost) and its open set of
//!   [`Fields`](evento::Fields)
//! - Own the create and merge-update rules (who wins when a body carries an `id`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//! The optional `openapi` feature derives `utoipa` schemas for the HTTP adapter.

pub mod error;
pub mod id;

pub mod evento;
