//! Positive/negative term lists
//!
//! Each list is a flat file with one entry per line. Entries containing a
//! space are phrases; everything else is a single-word term.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::Result;

/// Separator used when a phrase is collapsed into one token
pub const PHRASE_GLUE: &str = "_";

/// Terms and phrases of one polarity, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermList {
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
}

impl TermList {
    /// Split trimmed, non-blank lines into terms and phrases
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for line in lines {
            let entry = line.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if entry.contains(' ') {
                list.phrases.push(entry.to_string());
            } else {
                list.terms.push(entry.to_string());
            }
        }
        list
    }

    /// Read a term list file; a missing file yields an empty list
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Lexicon file {} not found, using empty list", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_lines(content.lines());
        debug!(
            "Loaded {} terms and {} phrases from {}",
            list.terms.len(),
            list.phrases.len(),
            path.display()
        );
        Ok(list)
    }

    /// Tokens this list matches after phrase normalization
    fn match_set(&self) -> HashSet<String> {
        self.terms
            .iter()
            .cloned()
            .chain(self.phrases.iter().map(|p| glue_phrase(p)))
            .collect()
    }
}

/// Join a phrase's words with [`PHRASE_GLUE`]
pub fn glue_phrase(phrase: &str) -> String {
    phrase.replace(' ', PHRASE_GLUE)
}

/// Immutable sentiment lexicon, built once per run
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: TermList,
    negative: TermList,
    positive_tokens: HashSet<String>,
    negative_tokens: HashSet<String>,
}

impl Lexicon {
    pub fn new(positive: TermList, negative: TermList) -> Self {
        let positive_tokens = positive.match_set();
        let negative_tokens = negative.match_set();
        Self {
            positive,
            negative,
            positive_tokens,
            negative_tokens,
        }
    }

    /// Build directly from in-memory lines
    pub fn from_lines<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self::new(TermList::from_lines(positive), TermList::from_lines(negative))
    }

    /// Load both term lists; missing files are treated as empty
    pub fn load<P: AsRef<Path>, N: AsRef<Path>>(positive_path: P, negative_path: N) -> Result<Self> {
        let lexicon = Self::new(
            TermList::from_file(positive_path)?,
            TermList::from_file(negative_path)?,
        );
        tracing::info!(
            "Lexicon loaded: {} positive / {} negative entries",
            lexicon.positive_tokens.len(),
            lexicon.negative_tokens.len()
        );
        Ok(lexicon)
    }

    pub fn positive(&self) -> &TermList {
        &self.positive
    }

    pub fn negative(&self) -> &TermList {
        &self.negative
    }

    /// Phrases to collapse during normalization: positive first, then negative
    pub fn phrases(&self) -> Vec<&str> {
        self.positive
            .phrases
            .iter()
            .chain(self.negative.phrases.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive_tokens.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative_tokens.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.positive_tokens.is_empty() && self.negative_tokens.is_empty()
    }
}
