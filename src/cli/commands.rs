//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Score review sentiment per category and summarize it by month")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: configured level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every review and write the per-review and monthly tables
    Run {
        /// Review table (CSV with Date, Content and Rating columns)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Directory with categories.json, pos_words.txt and neg_words.txt
        #[arg(long)]
        config_dir: Option<PathBuf>,
        /// Directory for the output tables
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Score a single piece of text and show per-category snippets
    Score {
        /// Review text
        text: String,
        /// Directory with categories.json, pos_words.txt and neg_words.txt
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}
