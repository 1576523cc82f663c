//! Logging configuration for review-sentiment

use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::Result;

const LOG_FILE_PREFIX: &str = "review-sentiment.log";

/// Initialize logging with configuration
///
/// Hold the returned guard until exit; dropping it flushes the log file.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.level));
    let guard = install(env_filter, config)?;

    tracing::info!("Logging initialized with level: {}", config.level);
    if config.file_output {
        tracing::info!(
            "Log files will be saved to: {}/{}.YYYY-MM-DD",
            config.log_dir.display(),
            LOG_FILE_PREFIX
        );
    }
    Ok(guard)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(
    config: &LoggingConfig,
    level: &str,
) -> Result<Option<WorkerGuard>> {
    let guard = install(level_filter(level), config)?;
    tracing::info!("Logging initialized with level: {}", level);
    Ok(guard)
}

/// Initialize simple console logging for testing
pub fn init_simple_logging() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
    Ok(())
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},review_sentiment={level}"))
}

fn file_writer(config: &LoggingConfig) -> Result<Option<(NonBlocking, WorkerGuard)>> {
    if !config.file_output {
        return Ok(None);
    }
    if !config.log_dir.exists() {
        std::fs::create_dir_all(&config.log_dir)?;
    }
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    Ok(Some(tracing_appender::non_blocking(file_appender)))
}

fn install(env_filter: EnvFilter, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    // Console output stays on stderr so stdout carries command results only
    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file_writer(config)? {
        Some((non_blocking, guard)) => (
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
