//! External polarity engines
//!
//! An engine returns a compound polarity in [-1, 1] for a piece of text. The
//! engine is optional: [`detect_engine`] probes it once at startup and the
//! run continues lexicon-only when it is missing.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::PolarityConfig;
use crate::errors::Result;
use crate::errors::SentimentError;

const PROBE_TEXT: &str = "good";

/// Source of an external compound polarity score
pub trait PolarityEngine {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Compound polarity for `text`, nominally in [-1, 1]
    fn compound(&self, text: &str) -> Result<f64>;
}

/// Polarity service reached over HTTP
///
/// `POST <endpoint>` with `{"text": ...}`, expects `{"compound": <float>, ...}`.
pub struct HttpPolarityEngine {
    endpoint: String,
    client: Client,
}

#[derive(Serialize)]
struct PolarityRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PolarityResponse {
    compound: f64,
}

impl HttpPolarityEngine {
    /// Create a new client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PolarityEngine for HttpPolarityEngine {
    fn name(&self) -> &str {
        "http"
    }

    fn compound(&self, text: &str) -> Result<f64> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PolarityRequest { text })
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SentimentError::Engine(format!(
                "polarity service error ({status}): {error_text}"
            )));
        }

        let result: PolarityResponse = response
            .json()
            .map_err(|e| SentimentError::Engine(format!("Failed to parse response: {e}")))?;

        if !result.compound.is_finite() {
            return Err(SentimentError::Engine(format!(
                "non-finite compound score: {}",
                result.compound
            )));
        }
        Ok(result.compound)
    }
}

/// Resolve the engine for this run
///
/// Returns `None` when no endpoint is configured or the probe request fails.
/// The outcome holds for the whole run; there is no retry.
pub fn detect_engine(config: &PolarityConfig) -> Option<Box<dyn PolarityEngine>> {
    let Some(endpoint) = config.endpoint_url() else {
        info!("No polarity endpoint configured, scoring with lexicon only");
        return None;
    };

    let engine = match HttpPolarityEngine::new(endpoint, Duration::from_secs(config.timeout_secs)) {
        Ok(engine) => engine,
        Err(e) => {
            warn!("Could not build polarity client for {}: {}", endpoint, e);
            return None;
        }
    };

    match engine.compound(PROBE_TEXT) {
        Ok(score) => {
            debug!("Polarity probe returned {}", score);
            info!("External polarity engine available at {}", engine.endpoint());
            Some(Box::new(engine))
        }
        Err(e) => {
            warn!(
                "Polarity engine at {} unavailable ({}), scoring with lexicon only",
                endpoint, e
            );
            None
        }
    }
}
