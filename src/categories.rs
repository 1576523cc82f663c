//! Category definitions and category-scoped snippet extraction
//!
//! A category is a name plus a list of regular expressions. The snippet for
//! a category is every sentence of a review that at least one pattern hits.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;
use tracing::info;

use crate::errors::Result;
use crate::errors::SentimentError;

lazy_static! {
    /// Sentence-ending punctuation followed by whitespace
    static ref SENTENCE_BREAK_RE: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// A named topic and the patterns that mark its sentences
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub name: String,
    pub patterns: Vec<Regex>,
}

impl CategoryDefinition {
    /// Compile `patterns` for `name`
    pub fn new<S: AsRef<str>>(name: impl Into<String>, patterns: &[S]) -> Result<Self> {
        let name = name.into();
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| SentimentError::Pattern {
                    category: name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name, patterns })
    }

    /// Snippet of `normalized_text` relevant to this category
    pub fn extract(&self, normalized_text: &str) -> String {
        extract(normalized_text, &self.patterns)
    }
}

/// All categories of a run, in configuration order
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    categories: Vec<CategoryDefinition>,
}

impl CategorySet {
    pub fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self { categories }
    }

    /// Parse a JSON object of `name -> [pattern, ...]`, keeping key order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(SentimentError::CategoryConfig(
                "expected a JSON object mapping category names to pattern lists".to_string(),
            ));
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, patterns) in map {
            let patterns: Vec<String> = serde_json::from_value(patterns).map_err(|e| {
                SentimentError::CategoryConfig(format!(
                    "patterns for category {name} must be a list of strings: {e}"
                ))
            })?;
            debug!("Category {} has {} patterns", name, patterns.len());
            categories.push(CategoryDefinition::new(name, &patterns)?);
        }
        Ok(Self { categories })
    }

    /// Load category definitions; a missing file is fatal
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SentimentError::CategoryConfig(format!(
                "category definitions not found at {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json_str(&content)?;
        info!(
            "Loaded {} categories from {}: {}",
            set.len(),
            path.display(),
            set.names().join(", ")
        );
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDefinition> {
        self.categories.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a CategoryDefinition;
    type IntoIter = std::slice::Iter<'a, CategoryDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split lowercased text after `.`, `!` or `?` followed by whitespace
///
/// The punctuation stays with its sentence and the whitespace run is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK_RE.find_iter(text) {
        // Punctuation is a single ASCII byte
        sentences.push(&text[start..=m.start()]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Join, in order, the sentences of `normalized_text` matched by any pattern
pub fn extract(normalized_text: &str, patterns: &[Regex]) -> String {
    if normalized_text.trim().is_empty() {
        return String::new();
    }
    let lowered = normalized_text.to_lowercase();
    split_sentences(&lowered)
        .into_iter()
        .filter(|sentence| patterns.iter().any(|p| p.is_match(sentence)))
        .collect::<Vec<_>>()
        .join(" ")
}
