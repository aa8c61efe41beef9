//! Keyword extraction and term normalization.
//!
//! `extract_keywords` turns free text into significant lower-case tokens.
//! `normalize_term` applies the same character rule to a whole skill or tool
//! name, and `KeywordIndex` is the one place tools are matched against
//! keywords, so scanned tokens and hand-entered terms compare alike.

use std::collections::HashSet;

/// Common English function words dropped by `extract_keywords`.
const STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "to", "of", "in", "on", "for", "with", "by", "at", "is", "are",
    "as", "be", "from", "that", "this", "it", "our", "we", "you", "your", "us", "will", "must",
    "have", "has", "was", "were", "or", "but", "if", "then", "so", "not", "can", "should", "may",
    "do", "does", "did", "using", "used", "into", "out", "about", "over", "under", "more",
    "less", "than", "such", "these", "those", "their", "which", "who", "what", "when", "where",
    "how", "why", "all", "any", "each", "other", "some", "most", "many", "much", "very", "just",
    "also", "too", "both", "either", "neither", "own", "same", "new", "now", "after", "before",
    "again", "once",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Extracts the deduplicated significant words of `text`, in first-seen order.
///
/// Lower-cases, removes every character outside `[a-z0-9]` and whitespace,
/// splits on whitespace runs and drops stopwords. Empty input yields an empty
/// list; this never fails.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

/// Comparison key for a skill or tool name, in the same form `extract_keywords`
/// produces: lower-cased, characters outside `[a-z0-9]` and whitespace removed,
/// whitespace runs collapsed. Stopwords are kept. "Node.js" → "nodejs".
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized set of `terms`, skipping blanks.
pub fn normalized_set<S: AsRef<str>>(terms: &[S]) -> HashSet<String> {
    terms
        .iter()
        .map(|t| normalize_term(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// A resume's keywords, indexed for matching required tools.
///
/// Keywords may be whole terms entered by hand ("Machine Learning") or single
/// tokens merged in by a resume scan ("machine", "learning").
#[derive(Debug, Default)]
pub struct KeywordIndex {
    terms: HashSet<String>,
    tokens: HashSet<String>,
}

impl KeywordIndex {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            terms: normalized_set(keywords),
            tokens: keywords
                .iter()
                .flat_map(|k| extract_keywords(k.as_ref()))
                .collect(),
        }
    }

    /// True when `tool` matches a whole keyword, or every significant word of
    /// `tool` appears among the keywords.
    pub fn covers(&self, tool: &str) -> bool {
        let term = normalize_term(tool);
        if term.is_empty() {
            return false;
        }
        if self.terms.contains(&term) {
            return true;
        }
        let words = extract_keywords(tool);
        !words.is_empty() && words.iter().all(|w| self.tokens.contains(w))
    }
}
