//! roadmap-bedrock
//!
//! Roadmap generation through the Bedrock Converse API.

pub mod error;
pub mod generate;
pub mod prompt;
