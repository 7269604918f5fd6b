//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure policy from
//! component markup to improve reuse and testability.

pub mod auth;
pub mod gate;
pub mod links;
pub mod session;
