//! Batch run handler

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use tracing::info;

use crate::batch::run_with_pipeline;
use crate::cli::output::*;
use crate::pipeline::ScoringPipeline;
use crate::AppConfig;

/// Apply command-line path overrides on top of the loaded configuration
pub fn apply_path_overrides(
    config: &mut AppConfig,
    data: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) {
    if let Some(data) = data {
        config.paths.data = data;
    }
    if let Some(config_dir) = config_dir {
        config.paths.config_dir = config_dir;
    }
    if let Some(out_dir) = out_dir {
        config.paths.out_dir = out_dir;
    }
}

pub fn handle_run_command(config: &AppConfig) -> Result<()> {
    info!(
        "Starting run: data={}, config_dir={}, out_dir={}",
        config.paths.data.display(),
        config.paths.config_dir.display(),
        config.paths.out_dir.display()
    );

    let pipeline = ScoringPipeline::from_config(config).with_context(|| {
        format!(
            "Failed to load scoring configuration from {}",
            config.paths.config_dir.display()
        )
    })?;
    if pipeline.lexicon().is_empty() {
        print_warning("Lexicon is empty; every defined score will be neutral or engine-only");
    }

    let report = run_with_pipeline(&pipeline, config)
        .with_context(|| format!("Failed to score {}", config.paths.data.display()))?;
    print_run_report(&report);
    Ok(())
}
