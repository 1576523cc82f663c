use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::SentimentError;

pub const POSITIVE_LEXICON_FILE: &str = "pos_words.txt";
pub const NEGATIVE_LEXICON_FILE: &str = "neg_words.txt";
pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Review table (CSV with Date, Content and Rating columns)
    #[serde(default = "default_data_path")]
    pub data: PathBuf,
    /// Directory holding the lexicons and category definitions
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("Data/Cleaned_Trail_Reviews.csv")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("Results")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data: default_data_path(),
            config_dir: default_config_dir(),
            out_dir: default_out_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Also write a daily rolling log file under `log_dir`
    #[serde(default = "default_file_output")]
    pub file_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

const fn default_file_output() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: default_log_dir(),
            file_output: default_file_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarityConfig {
    /// External polarity service; lexicon-only mode when unset
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_lexicon_weight")]
    pub lexicon_weight: f64,
    #[serde(default = "default_external_weight")]
    pub external_weight: f64,
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_lexicon_weight() -> f64 {
    0.6
}

const fn default_external_weight() -> f64 {
    0.4
}

impl PolarityConfig {
    /// Configured endpoint, ignoring blank values
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

impl Default for PolarityConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            lexicon_weight: default_lexicon_weight(),
            external_weight: default_external_weight(),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Fell back to the bundled example file
    Example(PathBuf),
    Defaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub polarity: PolarityConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the working directory
    ///
    /// Tries `config.toml`, then `config.example.toml`, then built-in defaults.
    /// Runs before logging is installed, so the caller reports the source.
    pub fn load() -> crate::Result<(Self, ConfigSource)> {
        Self::load_from_dir(".")
    }

    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> crate::Result<(Self, ConfigSource)> {
        let dir = dir.as_ref();
        let primary = dir.join("config.toml");
        if primary.exists() {
            return Ok((Self::from_file(&primary)?, ConfigSource::File(primary)));
        }
        let example = dir.join("config.example.toml");
        if example.exists() {
            return Ok((Self::from_file(&example)?, ConfigSource::Example(example)));
        }
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Reject weights that cannot form a blend
    pub fn validate(&self) -> crate::Result<()> {
        let PolarityConfig {
            lexicon_weight,
            external_weight,
            ..
        } = self.polarity;
        if !lexicon_weight.is_finite() || !external_weight.is_finite() {
            return Err(SentimentError::InvalidConfig(
                "polarity weights must be finite".to_string(),
            ));
        }
        if lexicon_weight < 0.0 || external_weight < 0.0 {
            return Err(SentimentError::InvalidConfig(
                "polarity weights must not be negative".to_string(),
            ));
        }
        if self.polarity.timeout_secs == 0 {
            return Err(SentimentError::InvalidConfig(
                "polarity.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn positive_lexicon_path(&self) -> PathBuf {
        self.paths.config_dir.join(POSITIVE_LEXICON_FILE)
    }

    pub fn negative_lexicon_path(&self) -> PathBuf {
        self.paths.config_dir.join(NEGATIVE_LEXICON_FILE)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.paths.config_dir.join(CATEGORIES_FILE)
    }

    pub fn review_scores_path(&self) -> PathBuf {
        self.paths.out_dir.join("review_sentiment_scores.csv")
    }

    pub fn monthly_summary_path(&self) -> PathBuf {
        self.paths.out_dir.join("monthly_sentiment_summary.csv")
    }

    /// Get the external polarity endpoint, if configured
    pub fn polarity_endpoint(&self) -> Option<&str> {
        self.polarity.endpoint_url()
    }
}
