//! Single-text scoring handler

use anyhow::Context;
use anyhow::Result;

use crate::cli::output::*;
use crate::pipeline::ScoringPipeline;
use crate::AppConfig;

pub fn handle_score_command(config: &AppConfig, text: &str) -> Result<()> {
    let pipeline = ScoringPipeline::from_config(config).with_context(|| {
        format!(
            "Failed to load scoring configuration from {}",
            config.paths.config_dir.display()
        )
    })?;
    if !pipeline.has_engine() {
        print_info("Scoring with lexicon only");
    }

    let scores = pipeline.score_text(text);
    print_text_scores(&pipeline.categories().names(), &scores);
    Ok(())
}
