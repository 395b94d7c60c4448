//! Keyword and phrase density.

use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::recommendations::{recommend, Check};
use super::{Severity, Status};
use crate::config::{
    KEYWORD_MIN_CHARS_EXCLUSIVE, STOP_WORDS, TOP_KEYWORDS_LIMIT, TOP_PHRASES_LIMIT,
};
use crate::utils::round1;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::utils::compile_regex_unsafe(r"[^\w\s]", "NON_WORD_RE"));

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordFrequency {
    pub word: String,
    pub count: usize,
    /// Percent of all words, one decimal
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseFrequency {
    pub phrase: String,
    pub count: usize,
    /// Percent of all words, one decimal
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensityRecord {
    pub top_keywords: Vec<KeywordFrequency>,
    pub top_phrases: Vec<PhraseFrequency>,
    /// All words before stop-word filtering
    pub total_words: usize,
    pub status: Status,
    pub recommendation: String,
}

/// Counts occurrences while remembering first-seen order for tie-breaking.
#[derive(Default)]
struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn add(&mut self, key: String) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries by count descending, ties in first-occurrence order.
    fn top(mut self, limit: usize, min_count: usize) -> Vec<(String, usize)> {
        // sort_by is stable, so equal counts keep insertion order
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .take(limit)
            .collect()
    }
}

fn density(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        0.0
    } else {
        round1(count as f64 / total_words as f64 * 100.0)
    }
}

/// Lower-cased words of `text` with punctuation treated as whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    NON_WORD_RE
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Builds the top keyword and phrase tables for visible text.
///
/// Stop words and words of two characters or fewer are dropped before
/// counting; 2- and 3-word phrases are formed over the filtered sequence and
/// only reported when seen more than once. Density is relative to all words.
pub fn analyze_keyword_density(text: &str) -> KeywordDensityRecord {
    let words = tokenize(text);
    let total_words = words.len();

    let filtered: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| w.chars().count() > KEYWORD_MIN_CHARS_EXCLUSIVE && !STOP_WORD_SET.contains(w))
        .collect();

    let mut keywords = FrequencyTable::default();
    for word in &filtered {
        keywords.add((*word).to_string());
    }

    let mut phrases = FrequencyTable::default();
    for i in 0..filtered.len().saturating_sub(1) {
        phrases.add(filtered[i..i + 2].join(" "));
        if i + 2 < filtered.len() {
            phrases.add(filtered[i..i + 3].join(" "));
        }
    }

    let top_keywords = keywords
        .top(TOP_KEYWORDS_LIMIT, 1)
        .into_iter()
        .map(|(word, count)| KeywordFrequency {
            word,
            count,
            density: density(count, total_words),
        })
        .collect();
    let top_phrases = phrases
        .top(TOP_PHRASES_LIMIT, 2)
        .into_iter()
        .map(|(phrase, count)| PhraseFrequency {
            phrase,
            count,
            density: density(count, total_words),
        })
        .collect();

    KeywordDensityRecord {
        top_keywords,
        top_phrases,
        total_words,
        status: Severity::Pass.status(),
        recommendation: recommend(Check::KeywordDensity, Severity::Pass),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Rust's SEO-tools, fast!"),
            vec!["rust", "s", "seo", "tools", "fast"]
        );
    }

    #[test]
    fn test_stop_words_and_short_words_excluded() {
        let record = analyze_keyword_density("The cat and the dog go to an ox");
        let words: Vec<&str> = record.top_keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
        assert_eq!(record.total_words, 9);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let record = analyze_keyword_density("zebra apple zebra apple mango");
        let words: Vec<(&str, usize)> = record
            .top_keywords
            .iter()
            .map(|k| (k.word.as_str(), k.count))
            .collect();
        assert_eq!(words, vec![("zebra", 2), ("apple", 2), ("mango", 1)]);
        assert_eq!(record.top_keywords[0].density, 40.0);
    }

    #[test]
    fn test_phrases_require_repeats() {
        let record =
            analyze_keyword_density("rust analyzer rocks. rust analyzer rocks. lonely phrase");
        let phrases: Vec<(&str, usize)> = record
            .top_phrases
            .iter()
            .map(|p| (p.phrase.as_str(), p.count))
            .collect();
        assert!(phrases.contains(&("rust analyzer", 2)));
        assert!(phrases.contains(&("rust analyzer rocks", 2)));
        assert!(!phrases.iter().any(|(p, _)| *p == "lonely phrase"));
    }

    #[test]
    fn test_top_lists_are_capped() {
        let text: String = (0..30)
            .map(|i| format!("keyword{} ", i))
            .collect();
        let record = analyze_keyword_density(&text);
        assert_eq!(record.top_keywords.len(), 10);
        assert_eq!(record.top_keywords[0].word, "keyword0");
    }

    #[test]
    fn test_empty_text() {
        let record = analyze_keyword_density("");
        assert_eq!(record.total_words, 0);
        assert!(record.top_keywords.is_empty());
        assert!(record.top_phrases.is_empty());
        assert_eq!(record.status, Status::Passed);
    }
}
