//! Networking modules for the session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the session fetch and `types` defines the wire schema of the
//! auth backend's profile payload.

pub mod api;
pub mod types;
