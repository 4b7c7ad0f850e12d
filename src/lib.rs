//! Password policy evaluation library
//!
//! This library evaluates candidate passwords against a fixed policy:
//! length bounds, a letters-and-digits alphabet, at least one digit, and
//! no embedded English words. The English-word check runs asynchronously
//! against an external dictionary service, with verdict caching and
//! last-submission-wins arbitration between overlapping checks.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_URL`: Custom base URL for the dictionary lookup
//!   service (default: the free dictionary API)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pwd_policy::{DictionaryConfig, HttpDictionaryClient, PolicyEvaluator};
//! use secrecy::SecretString;
//!
//! # async fn example() {
//! let client = Arc::new(HttpDictionaryClient::new(DictionaryConfig::from_env()));
//! let evaluator = PolicyEvaluator::new(client);
//! let mut snapshots = evaluator.subscribe();
//!
//! // Re-submit on every keystroke; only the newest submission settles
//! let password = SecretString::new("MyPassw0rd".to_string().into());
//! evaluator.submit(&password);
//!
//! let snapshot = snapshots
//!     .wait_for(|s| s.is_settled())
//!     .await
//!     .expect("evaluator alive")
//!     .clone();
//! println!("valid: {}", snapshot.is_valid());
//! println!("english words: {:?}", snapshot.english_words());
//! # }
//! ```

// Internal modules
mod cache;
mod dictionary;
mod evaluator;
mod rules;
mod scanner;
mod tokenizer;

// Public API
pub use cache::VerdictCache;
pub use dictionary::{
    DEFAULT_DICTIONARY_URL, DictionaryConfig, DictionaryError, HttpDictionaryClient, WordLookup,
    WordVerdict,
};
pub use evaluator::{
    EvaluationSnapshot, PolicyEvaluator, ProgressBand, Requirement, RequirementStatus,
    WordScanStatus,
};
pub use rules::{
    MAX_LENGTH, MIN_LENGTH, has_correct_length, has_digit, is_alnum_only, valid_characters,
};
pub use scanner::{MIN_WORD_LENGTH, WordScanner};
pub use tokenizer::extract_candidate_words;
