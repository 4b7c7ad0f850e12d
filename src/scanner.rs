//! Word-scan orchestrator
//!
//! Ties the tokenizer, the verdict cache and the dictionary client
//! together: one scan per password, all lookups dispatched concurrently.

use std::sync::Arc;

use futures::future::join_all;

use crate::cache::VerdictCache;
use crate::dictionary::{WordLookup, WordVerdict};
use crate::tokenizer::extract_candidate_words;

/// Candidate words shorter than this are never looked up. Short fragments
/// produce too many false positives and inflate lookup volume.
pub const MIN_WORD_LENGTH: usize = 3;

/// Scans passwords for embedded English words.
pub struct WordScanner {
    lookup: Arc<dyn WordLookup>,
    cache: Arc<VerdictCache>,
}

impl WordScanner {
    pub fn new(lookup: Arc<dyn WordLookup>, cache: Arc<VerdictCache>) -> Self {
        Self { lookup, cache }
    }

    /// Returns every candidate word of the password confirmed English,
    /// in original left-to-right order. A word occurring more than once
    /// appears once per occurrence.
    ///
    /// All lookups for one scan are dispatched before any is awaited; the
    /// scan completes only when every lookup has. A password without any
    /// candidate of [`MIN_WORD_LENGTH`] letters resolves immediately.
    pub async fn scan(&self, password: &str) -> Vec<String> {
        let candidates: Vec<String> = extract_candidate_words(password)
            .into_iter()
            .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
            .collect();

        if candidates.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count = candidates.len(), "dispatching word lookups");

        let lookups = candidates
            .iter()
            .map(|word| self.cache.get_or_lookup(word, &*self.lookup));
        let verdicts = join_all(lookups).await;

        candidates
            .into_iter()
            .zip(verdicts)
            .filter(|(_, verdict)| *verdict == WordVerdict::English)
            .map(|(word, _)| word)
            .collect()
    }
}
