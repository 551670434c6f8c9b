//! roadmap-core
//!
//! Pure domain types, the response parser, and the results-view formatter.
//! No AWS dependency; this is the shared vocabulary of the roadmap system.

pub mod display;
pub mod error;
pub mod models;
pub mod parse;
