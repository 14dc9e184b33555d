//! Core types and the week-window state machine for the rota roster viewer.
//!
//! This crate is deliberately free of HTTP and UI dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod roster;
pub mod source;
pub mod week;
pub mod window;
pub mod wire;

pub use error::{Error, Result};
