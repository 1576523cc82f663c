//! Text normalization ahead of snippet extraction and scoring
//!
//! Lowercases the text and collapses multi-word expressions into single
//! tokens so the tokenizer sees them as one word.

use super::lexicon::glue_phrase;

/// Built-in idioms, applied before any lexicon phrase
const IDIOMS: [(&str, &str); 5] = [
    ("worth it", "worthit"),
    ("must do", "mustdo"),
    ("must see", "must_see"),
    ("highly recommend", "highly_recommend"),
    ("never again", "never_again"),
];

/// Lowercase `text` and collapse idioms and lexicon phrases
///
/// Phrases are replaced as plain substrings in the order given. A phrase that
/// is a substring of a later one can consume it first, and matches are not
/// restricted to word boundaries ("bad view" also hits "bad viewpoint").
pub fn normalize(text: &str, phrases: &[&str]) -> String {
    let mut normalized = text.to_lowercase();

    for (idiom, token) in IDIOMS {
        if normalized.contains(idiom) {
            normalized = normalized.replace(idiom, token);
        }
    }

    for phrase in phrases {
        if !phrase.is_empty() && normalized.contains(phrase) {
            normalized = normalized.replace(phrase, &glue_phrase(phrase));
        }
    }

    normalized
}
