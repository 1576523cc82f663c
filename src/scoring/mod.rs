//! Sentiment scoring core
//!
//! - `lexicon`: positive/negative term lists
//! - `normalizer`: lowercasing and phrase collapsing
//! - `polarity`: lexicon score and blending with an external engine
//! - `engine`: optional external polarity engines
//! - `postprocess`: per-category score corrections

pub mod engine;
pub mod lexicon;
pub mod normalizer;
pub mod polarity;
pub mod postprocess;

pub use engine::detect_engine;
pub use engine::HttpPolarityEngine;
pub use engine::PolarityEngine;
pub use lexicon::Lexicon;
pub use lexicon::TermList;
pub use normalizer::normalize;
pub use polarity::lexicon_score;
pub use polarity::tokenize;
pub use polarity::PolarityScorer;
pub use postprocess::CategoryCorrection;
pub use postprocess::CategoryPostprocessor;
pub use postprocess::NegationFlip;
