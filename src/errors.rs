use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Category configuration error: {0}")]
    CategoryConfig(String),

    #[error("Invalid pattern for category {category}: {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Polarity engine error: {0}")]
    Engine(String),

    #[error("Polarity engine request failed: {0}")]
    EngineRequest(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
