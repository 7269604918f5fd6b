//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its session fetch and shell variant and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod home;
