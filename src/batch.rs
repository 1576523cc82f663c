//! Full batch run: load, score, aggregate, write

use std::path::PathBuf;

use tracing::info;

use crate::aggregator::aggregate;
use crate::config::AppConfig;
use crate::dataset::load_reviews;
use crate::dataset::write_monthly_summary;
use crate::dataset::write_review_scores;
use crate::pipeline::ScoringPipeline;
use crate::Result;

/// What a batch run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub reviews: usize,
    pub dropped: usize,
    pub months: usize,
    pub categories: Vec<String>,
    pub blended: bool,
    pub review_scores_path: PathBuf,
    pub monthly_summary_path: PathBuf,
}

/// Build the pipeline from `config` and run it over the configured data
pub fn run_batch(config: &AppConfig) -> Result<RunReport> {
    let pipeline = ScoringPipeline::from_config(config)?;
    run_with_pipeline(&pipeline, config)
}

/// Run an already-built pipeline over the configured data
pub fn run_with_pipeline(pipeline: &ScoringPipeline, config: &AppConfig) -> Result<RunReport> {
    let loaded = load_reviews(&config.paths.data)?;
    let rows = pipeline.score_reviews(&loaded.reviews);
    let buckets = aggregate(&rows);

    let review_scores_path = config.review_scores_path();
    let monthly_summary_path = config.monthly_summary_path();
    write_review_scores(&review_scores_path, pipeline.categories(), &rows)?;
    write_monthly_summary(&monthly_summary_path, pipeline.categories(), &buckets)?;

    info!(
        "Batch complete: {} reviews, {} months",
        rows.len(),
        buckets.len()
    );

    Ok(RunReport {
        reviews: rows.len(),
        dropped: loaded.dropped,
        months: buckets.len(),
        categories: pipeline
            .categories()
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
        blended: pipeline.has_engine(),
        review_scores_path,
        monthly_summary_path,
    })
}
