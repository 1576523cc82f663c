//! Category-specific score corrections
//!
//! Corrections are looked up by lowercase category name, so a new rule is a
//! new [`CategoryCorrection`] registered on the [`CategoryPostprocessor`].

use std::collections::HashMap;

/// Category whose snippets get the "not crowded" negation flip
pub const CROWDING_CATEGORY: &str = "crowding";

/// A correction applied to one category's raw score
pub trait CategoryCorrection {
    fn apply(&self, snippet: &str, score: f64) -> f64;
}

/// Flips the sign when a snippet contains a negated cue
///
/// A zero score cannot be flipped, so it is replaced with `zero_replacement`.
#[derive(Debug, Clone)]
pub struct NegationFlip {
    pub cue: String,
    pub zero_replacement: f64,
}

impl NegationFlip {
    /// "not crowded" reads as a positive remark about crowding
    pub fn not_crowded() -> Self {
        Self {
            cue: "not crowded".to_string(),
            zero_replacement: 0.4,
        }
    }
}

impl CategoryCorrection for NegationFlip {
    fn apply(&self, snippet: &str, score: f64) -> f64 {
        if !snippet.contains(&self.cue) {
            return score;
        }
        if score == 0.0 {
            self.zero_replacement
        } else {
            -score
        }
    }
}

/// Registry of corrections keyed by lowercase category name
pub struct CategoryPostprocessor {
    corrections: HashMap<String, Box<dyn CategoryCorrection>>,
}

impl CategoryPostprocessor {
    /// A registry without any corrections
    pub fn empty() -> Self {
        Self {
            corrections: HashMap::new(),
        }
    }

    /// Register `correction` for `category`, replacing any previous rule
    pub fn register(&mut self, category: &str, correction: Box<dyn CategoryCorrection>) {
        self.corrections
            .insert(category.to_lowercase(), correction);
    }

    pub fn has_correction(&self, category: &str) -> bool {
        self.corrections.contains_key(&category.to_lowercase())
    }

    /// Apply the category's correction; undefined scores stay undefined
    pub fn postprocess(&self, category: &str, snippet: &str, score: Option<f64>) -> Option<f64> {
        let score = score?;
        match self.corrections.get(&category.to_lowercase()) {
            Some(correction) => Some(correction.apply(snippet, score)),
            None => Some(score),
        }
    }
}

impl Default for CategoryPostprocessor {
    /// Registry with the crowding negation flip
    fn default() -> Self {
        let mut postprocessor = Self::empty();
        postprocessor.register(CROWDING_CATEGORY, Box::new(NegationFlip::not_crowded()));
        postprocessor
    }
}
