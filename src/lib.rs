//! Rule-based review sentiment scoring
//!
//! Reviews are normalized, split into per-category snippets, scored against
//! a positive/negative lexicon (optionally blended with an external polarity
//! engine) and aggregated into monthly statistics.

pub mod aggregator;
pub mod batch;
pub mod categories;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod scoring;

#[cfg(test)]
mod models_tests;

pub use config::AppConfig;
pub use errors::*;
