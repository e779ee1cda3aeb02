//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the remote calls behind the `SessionTransport` seam and
//! `types` defines the JSON wire schema.

pub mod api;
pub mod types;
