//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - run: Full batch scoring and aggregation
//! - score: Scoring a single text
//! - info: Information display (config)

pub mod info;
pub mod run;
pub mod score;

// Re-export all public handlers
pub use info::*;
pub use run::*;
pub use score::*;
