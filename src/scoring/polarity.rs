//! Lexicon polarity and blending with an external engine

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::engine::PolarityEngine;
use super::lexicon::Lexicon;
use crate::config::PolarityConfig;

lazy_static! {
    /// Word-like spans; underscores keep collapsed phrases whole
    static ref TOKEN_RE: Regex = Regex::new(r"[a-zA-Z_']+").unwrap();
}

/// Split text into lowercase word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lexicon-only polarity
///
/// `None` when the text has no tokens, `0.0` when tokens exist but none are
/// in the lexicon, otherwise `(pos - neg) / (pos + neg)`.
pub fn lexicon_score(text: &str, lexicon: &Lexicon) -> Option<f64> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return None;
    }

    let pos = tokens.iter().filter(|t| lexicon.is_positive(t)).count();
    let neg = tokens.iter().filter(|t| lexicon.is_negative(t)).count();
    if pos == 0 && neg == 0 {
        return Some(0.0);
    }

    Some((pos as f64 - neg as f64) / (pos + neg) as f64)
}

/// Blends the lexicon score with an optional external engine
pub struct PolarityScorer {
    engine: Option<Box<dyn PolarityEngine>>,
    lexicon_weight: f64,
    external_weight: f64,
}

impl PolarityScorer {
    /// Lexicon-only scorer
    pub fn lexicon_only() -> Self {
        let defaults = PolarityConfig::default();
        Self {
            engine: None,
            lexicon_weight: defaults.lexicon_weight,
            external_weight: defaults.external_weight,
        }
    }

    /// Scorer with the default 0.6 / 0.4 blend
    pub fn with_engine(engine: Box<dyn PolarityEngine>) -> Self {
        Self {
            engine: Some(engine),
            ..Self::lexicon_only()
        }
    }

    /// Scorer built from an already-detected engine and configured weights
    pub fn from_config(engine: Option<Box<dyn PolarityEngine>>, config: &PolarityConfig) -> Self {
        Self {
            engine,
            lexicon_weight: config.lexicon_weight,
            external_weight: config.external_weight,
        }
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Score a span of text
    ///
    /// Blank text is undefined whether or not an engine is present. A failing
    /// engine call falls back to the lexicon score for this text only.
    pub fn score(&self, text: &str, lexicon: &Lexicon) -> Option<f64> {
        if text.trim().is_empty() {
            return None;
        }
        let lexical = lexicon_score(text, lexicon)?;

        let Some(engine) = &self.engine else {
            return Some(lexical);
        };
        match engine.compound(text) {
            Ok(external) if external.is_finite() => {
                Some(self.lexicon_weight * lexical + self.external_weight * external)
            }
            Ok(external) => {
                debug!(
                    "{} engine returned non-finite score {}, using lexicon score",
                    engine.name(),
                    external
                );
                Some(lexical)
            }
            Err(e) => {
                debug!("{} engine failed, using lexicon score: {}", engine.name(), e);
                Some(lexical)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::errors::Result;
    use crate::SentimentError;

    struct FixedEngine(f64);

    impl PolarityEngine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn compound(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingEngine;

    impl PolarityEngine for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }

        fn compound(&self, _text: &str) -> Result<f64> {
            Err(SentimentError::Engine("boom".to_string()))
        }
    }

    /// Counts calls so tests can assert the engine was never reached
    struct CountingEngine(Rc<Cell<usize>>);

    impl PolarityEngine for CountingEngine {
        fn name(&self) -> &str {
            "counting"
        }

        fn compound(&self, _text: &str) -> Result<f64> {
            self.0.set(self.0.get() + 1);
            Ok(1.0)
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_lines(["great", "scenic", "well worth"], ["muddy", "crowded"])
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_apostrophes() {
        assert_eq!(
            tokenize("Don't miss the must_see view, 10/10!"),
            vec!["don't", "miss", "the", "must_see", "view"]
        );
    }

    #[test]
    fn test_no_hits_is_exact_zero() {
        assert_eq!(lexicon_score("we walked the loop", &lexicon()), Some(0.0));
    }

    #[test]
    fn test_no_tokens_is_undefined() {
        assert_eq!(lexicon_score("123 !!! 456", &lexicon()), None);
        assert_eq!(lexicon_score("", &lexicon()), None);
    }

    #[test]
    fn test_ratio() {
        let score = lexicon_score("great scenic trail but muddy", &lexicon()).unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(lexicon_score("muddy and crowded", &lexicon()), Some(-1.0));
    }

    #[test]
    fn test_glued_phrase_counts_once() {
        assert_eq!(lexicon_score("well_worth the climb", &lexicon()), Some(1.0));
    }

    #[test]
    fn test_blank_text_is_undefined_even_with_engine() {
        let calls = Rc::new(Cell::new(0));
        let scorer = PolarityScorer::with_engine(Box::new(CountingEngine(Rc::clone(&calls))));
        assert_eq!(scorer.score("   \n\t", &lexicon()), None);
        assert_eq!(scorer.score("", &lexicon()), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_blend_weights() {
        let scorer = PolarityScorer::with_engine(Box::new(FixedEngine(0.5)));
        let score = scorer.score("great views", &lexicon()).unwrap();
        assert!((score - (0.6 * 1.0 + 0.4 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_blend_with_neutral_lexicon() {
        let scorer = PolarityScorer::with_engine(Box::new(FixedEngine(-0.25)));
        let score = scorer.score("a walk", &lexicon()).unwrap();
        assert!((score - 0.4 * -0.25).abs() < 1e-12);
    }

    #[test]
    fn test_engine_failure_falls_back_to_lexicon() {
        let scorer = PolarityScorer::with_engine(Box::new(FailingEngine));
        assert_eq!(scorer.score("muddy", &lexicon()), Some(-1.0));
    }

    #[test]
    fn test_non_finite_engine_score_falls_back() {
        let scorer = PolarityScorer::with_engine(Box::new(FixedEngine(f64::NAN)));
        assert_eq!(scorer.score("great", &lexicon()), Some(1.0));
    }

    #[test]
    fn test_lexicon_only_matches_lexicon_score() {
        let scorer = PolarityScorer::lexicon_only();
        assert!(!scorer.has_engine());
        assert_eq!(
            scorer.score("great but crowded and muddy", &lexicon()),
            lexicon_score("great but crowded and muddy", &lexicon())
        );
    }

    #[test]
    fn test_configured_weights() {
        let config = PolarityConfig {
            lexicon_weight: 0.5,
            external_weight: 0.5,
            ..PolarityConfig::default()
        };
        let scorer = PolarityScorer::from_config(Some(Box::new(FixedEngine(0.0))), &config);
        assert_eq!(scorer.score("great", &lexicon()), Some(0.5));
    }
}
