//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the review-sentiment CLI

use crate::batch::RunReport;
use crate::dataset::format_score;
use crate::pipeline::TextScores;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

fn display_score(score: Option<f64>) -> String {
    match score {
        Some(_) => format_score(score),
        None => "undefined".to_string(),
    }
}

/// Print the outcome of a batch run
pub fn print_run_report(report: &RunReport) {
    print_success(&format!("Wrote: {}", report.review_scores_path.display()));
    print_success(&format!("Wrote: {}", report.monthly_summary_path.display()));
    println!();
    println!("📊 Run summary");
    println!("  Reviews scored: {}", report.reviews);
    if report.dropped > 0 {
        println!("  Rows dropped: {}", report.dropped);
    }
    println!("  Months: {}", report.months);
    println!("  Categories: {}", report.categories.join(", "));
    println!(
        "  Scoring mode: {}",
        if report.blended {
            "lexicon + external engine"
        } else {
            "lexicon only"
        }
    );
}

/// Print scores for a single text
pub fn print_text_scores(category_names: &[&str], scores: &TextScores) {
    println!("📝 Normalized: {}", truncate_str(&scores.normalized, 200));
    println!("⭐ Overall: {}", display_score(scores.overall));
    println!();

    for (name, category) in category_names.iter().zip(&scores.categories) {
        println!("  🏷️  {name}: {}", display_score(category.sentiment));
        if !category.snippet.is_empty() {
            println!("      \"{}\"", truncate_str(&category.snippet, 120));
        }
    }
}

pub fn print_config(config: &AppConfig) {
    println!("📋 review-sentiment Configuration:");
    println!();

    println!("📁 Paths:");
    println!("  Data: {}", config.paths.data.display());
    println!("  Config dir: {}", config.paths.config_dir.display());
    println!("  Output dir: {}", config.paths.out_dir.display());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    if config.logging.file_output {
        println!("  Log dir: {}", config.logging.log_dir.display());
    } else {
        println!("  File output: disabled");
    }
    println!();

    println!("🎯 Polarity:");
    println!(
        "  Endpoint: {}",
        config.polarity_endpoint().unwrap_or("(none, lexicon only)")
    );
    println!("  Timeout: {}s", config.polarity.timeout_secs);
    println!(
        "  Blend: {} lexicon / {} external",
        config.polarity.lexicon_weight, config.polarity.external_weight
    );
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}
