//! roadmap-export
//!
//! PDF generation from raw roadmap text.

pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod styles;
