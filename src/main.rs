use clap::Parser;
use review_sentiment::cli::apply_path_overrides;
use review_sentiment::cli::handle_config_command;
use review_sentiment::cli::handle_run_command;
use review_sentiment::cli::handle_score_command;
use review_sentiment::cli::Cli;
use review_sentiment::cli::Commands;
use review_sentiment::config::ConfigSource;
use review_sentiment::AppConfig;
use tracing::info;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (mut config, source) = match &cli.config {
        Some(path) => (AppConfig::from_file(path)?, ConfigSource::File(path.clone())),
        None => AppConfig::load()?,
    };

    // Initialize logging; the guard flushes the log file when main returns
    let _log_guard = if cli.verbose {
        review_sentiment::logging::init_logging_with_level(&config.logging, "debug")?
    } else {
        review_sentiment::logging::init_logging_with_config(&config.logging)?
    };
    match &source {
        ConfigSource::File(path) => info!("Configuration loaded from {}", path.display()),
        ConfigSource::Example(path) => warn!(
            "Using {}. Create config.toml to customize the run.",
            path.display()
        ),
        ConfigSource::Defaults => info!("No config file found, using built-in defaults"),
    }

    // Execute the requested command
    match cli.command {
        Commands::Run {
            data,
            config_dir,
            out_dir,
        } => {
            apply_path_overrides(&mut config, data, config_dir, out_dir);
            handle_run_command(&config)?;
        }
        Commands::Score { text, config_dir } => {
            apply_path_overrides(&mut config, None, config_dir, None);
            handle_score_command(&config, &text)?;
        }
        Commands::Config => handle_config_command(&config)?,
    }

    Ok(())
}
