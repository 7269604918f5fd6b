//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome from the models in `state::shell`. Only
//! `shell::ShellComposer` reads the session; everything below it receives
//! plain values.

pub mod footer;
pub mod logo;
pub mod nav;
pub mod shell;
pub mod user_menu;
