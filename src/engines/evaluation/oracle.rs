//! Word-entropy oracle over a reference corpus.
//!
//! A query's constant-length words (k-words) are looked up in the reference;
//! the entropy of the distribution of matched words is the query's word
//! entropy. Words containing the inter-sequence delimiter are never scored.

use crate::engines::evaluation::entropy::entropy_of_counts;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Word entropy of a query and the number of distinct words it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordEntropy {
    pub entropy: f64,
    pub symbol_count: usize,
}

impl WordEntropy {
    pub const EMPTY: WordEntropy = WordEntropy {
        entropy: 0.0,
        symbol_count: 0,
    };
}

/// Source of word entropies, built once from a reference string.
pub trait EntropyOracle: Send + Sync {
    fn query_entropy(&self, query: &str, word_len: usize) -> WordEntropy;
}

/// Suffix-array index of the reference corpus.
///
/// Lookups are binary searches over the sorted suffixes, so any word length
/// can be queried against the same index.
pub struct SuffixArrayOracle {
    text: Vec<u8>,
    suffixes: Vec<usize>,
    delimiter: u8,
}

impl SuffixArrayOracle {
    pub fn build(reference: &str, delimiter: char) -> Self {
        let text = reference.as_bytes().to_vec();
        let mut suffixes: Vec<usize> = (0..text.len()).collect();
        suffixes.par_sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));

        log::debug!("Suffix index built over {} symbols", text.len());

        Self {
            text,
            suffixes,
            delimiter: delimiter as u8,
        }
    }

    /// True when `word` occurs anywhere in the reference.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return true;
        }
        self.suffixes
            .binary_search_by(|&start| {
                let suffix = &self.text[start..];
                suffix[..word.len().min(suffix.len())].cmp(word)
            })
            .is_ok()
    }
}

impl EntropyOracle for SuffixArrayOracle {
    fn query_entropy(&self, query: &str, word_len: usize) -> WordEntropy {
        let bytes = query.as_bytes();
        if word_len == 0 || bytes.len() < word_len {
            return WordEntropy::EMPTY;
        }

        let mut hits: BTreeMap<&[u8], usize> = BTreeMap::new();
        for word in bytes.windows(word_len) {
            if word.contains(&self.delimiter) {
                continue;
            }
            if self.contains(word) {
                *hits.entry(word).or_insert(0) += 1;
            }
        }

        WordEntropy {
            entropy: entropy_of_counts(hits.values().copied()),
            symbol_count: hits.len(),
        }
    }
}
