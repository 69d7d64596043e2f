//! # eventos-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port):
//!   - `EventoRepository`: list, find, append, merge-update, remove
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `EventoService`: list, get, create, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `eventos-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
