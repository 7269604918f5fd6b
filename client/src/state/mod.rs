//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `menu`, `auth`) so the shell and its
//! components depend on small focused models. `shell` derives the render model
//! from the other three.

pub mod auth;
pub mod menu;
pub mod session;
pub mod shell;
