//! roadmap-desktop library root.
//!
//! Exposes the application modules so integration tests can drive the
//! coordinator and config handling without going through the CLI.

pub mod aws;
pub mod commands;
pub mod config;
pub mod coordinator;
pub mod state;
