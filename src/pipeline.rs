//! End-to-end review scoring
//!
//! normalize → extract per category → score → correct, plus an overall score
//! for the whole normalized review.

use tracing::debug;
use tracing::info;

use crate::categories::CategorySet;
use crate::config::AppConfig;
use crate::models::CategoryScore;
use crate::models::Review;
use crate::models::ScoredReview;
use crate::scoring::detect_engine;
use crate::scoring::normalize;
use crate::scoring::CategoryPostprocessor;
use crate::scoring::Lexicon;
use crate::scoring::PolarityScorer;
use crate::Result;

/// Read-only scoring state for one run
pub struct ScoringPipeline {
    lexicon: Lexicon,
    categories: CategorySet,
    scorer: PolarityScorer,
    postprocessor: CategoryPostprocessor,
}

/// Scores for a single piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextScores {
    pub normalized: String,
    pub categories: Vec<CategoryScore>,
    pub overall: Option<f64>,
}

impl ScoringPipeline {
    pub fn new(
        lexicon: Lexicon,
        categories: CategorySet,
        scorer: PolarityScorer,
        postprocessor: CategoryPostprocessor,
    ) -> Self {
        Self {
            lexicon,
            categories,
            scorer,
            postprocessor,
        }
    }

    /// Load lexicon and categories from the config directory and probe the
    /// external engine once
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let categories = CategorySet::load(config.categories_path())?;
        let lexicon = Lexicon::load(config.positive_lexicon_path(), config.negative_lexicon_path())?;
        let engine = detect_engine(&config.polarity);
        let scorer = PolarityScorer::from_config(engine, &config.polarity);

        Ok(Self::new(
            lexicon,
            categories,
            scorer,
            CategoryPostprocessor::default(),
        ))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn has_engine(&self) -> bool {
        self.scorer.has_engine()
    }

    /// Score free text overall and for every category
    pub fn score_text(&self, text: &str) -> TextScores {
        let normalized = normalize(text, &self.lexicon.phrases());

        let categories = self
            .categories
            .iter()
            .map(|category| {
                let snippet = category.extract(&normalized);
                let raw = self.scorer.score(&snippet, &self.lexicon);
                let sentiment = self.postprocessor.postprocess(&category.name, &snippet, raw);
                CategoryScore { snippet, sentiment }
            })
            .collect();

        let overall = self.scorer.score(&normalized, &self.lexicon);

        TextScores {
            normalized,
            categories,
            overall,
        }
    }

    pub fn score_review(&self, review: &Review) -> ScoredReview {
        let TextScores {
            categories,
            overall,
            ..
        } = self.score_text(&review.content);
        ScoredReview {
            review: review.clone(),
            categories,
            overall,
        }
    }

    /// Score every review; output rows follow input order
    pub fn score_reviews(&self, reviews: &[Review]) -> Vec<ScoredReview> {
        info!(
            "Scoring {} reviews across {} categories ({})",
            reviews.len(),
            self.categories.len(),
            if self.has_engine() {
                "blended"
            } else {
                "lexicon only"
            }
        );
        let rows: Vec<ScoredReview> = reviews.iter().map(|r| self.score_review(r)).collect();
        debug!(
            "{} reviews have an overall score",
            rows.iter().filter(|r| r.overall.is_some()).count()
        );
        rows
    }
}
