//! Verdict cache
//!
//! Memoization layer in front of the dictionary lookup client.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::dictionary::{WordLookup, WordVerdict};

/// Process-lifetime cache of word verdicts.
///
/// Keys are case-sensitive and stored exactly as looked up (`"The"` and
/// `"the"` are distinct entries). Entries are never evicted; the realistic
/// vocabulary of password fragments keeps growth bounded in practice.
///
/// Concurrent misses for the same word may race and issue duplicate
/// external calls; last writer wins, which is harmless because verdicts
/// for the same word are idempotent.
pub struct VerdictCache {
    verdicts: RwLock<HashMap<String, WordVerdict>>,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self {
            verdicts: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached verdict for `word`, or delegates to `lookup`,
    /// stores the result under the exact word key, and returns it.
    ///
    /// The lock is never held across the external call.
    pub async fn get_or_lookup(&self, word: &str, lookup: &dyn WordLookup) -> WordVerdict {
        let cached = self.verdicts.read().unwrap().get(word).copied();
        if let Some(verdict) = cached {
            #[cfg(feature = "tracing")]
            tracing::debug!(word, ?verdict, "verdict cache hit");
            return verdict;
        }

        let verdict = lookup.is_english_word(word).await;
        self.verdicts
            .write()
            .unwrap()
            .insert(word.to_owned(), verdict);
        verdict
    }

    /// Number of cached verdicts.
    pub fn len(&self) -> usize {
        self.verdicts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VerdictCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Lookup fake that records every word it is asked about.
    struct CountingLookup {
        english: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl CountingLookup {
        fn new(english: &[&'static str]) -> Self {
            Self {
                english: english.to_vec(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WordLookup for CountingLookup {
        async fn is_english_word(&self, word: &str) -> WordVerdict {
            self.calls.lock().unwrap().push(word.to_owned());
            if self.english.iter().any(|w| *w == word) {
                WordVerdict::English
            } else {
                WordVerdict::NotEnglish
            }
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit_performs_one_call() {
        let cache = VerdictCache::new();
        let lookup = CountingLookup::new(&["test"]);

        let first = cache.get_or_lookup("test", &lookup).await;
        let second = cache.get_or_lookup("test", &lookup).await;

        assert_eq!(first, WordVerdict::English);
        assert_eq!(second, WordVerdict::English);
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let cache = VerdictCache::new();
        let lookup = CountingLookup::new(&["the"]);

        let upper = cache.get_or_lookup("The", &lookup).await;
        let lower = cache.get_or_lookup("the", &lookup).await;

        assert_eq!(upper, WordVerdict::NotEnglish);
        assert_eq!(lower, WordVerdict::English);
        assert_eq!(lookup.call_count(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_negative_verdicts_are_cached_too() {
        let cache = VerdictCache::new();
        let lookup = CountingLookup::new(&[]);

        assert_eq!(
            cache.get_or_lookup("zzzqx", &lookup).await,
            WordVerdict::NotEnglish
        );
        assert_eq!(
            cache.get_or_lookup("zzzqx", &lookup).await,
            WordVerdict::NotEnglish
        );
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let cache = VerdictCache::new();
        assert!(cache.is_empty());
    }
}
