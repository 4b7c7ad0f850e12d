//! Dictionary lookup client
//!
//! Wraps the external lookup-by-word service behind the [`WordLookup`]
//! trait. Lookup failures never escape this module: anything other than a
//! clean "not found" degrades to [`WordVerdict::English`] so a degraded
//! service can never wave a password through.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Default endpoint of the free dictionary API, `GET {base}/{word}`.
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a dictionary lookup for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordVerdict {
    English,
    NotEnglish,
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("dictionary responded with unexpected status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("dictionary lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Configuration for the dictionary lookup service.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Base URL of the lookup-by-word endpoint.
    pub base_url: String,
    /// Upper bound for a single lookup round trip.
    pub lookup_timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DICTIONARY_URL.to_string(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl DictionaryConfig {
    /// Builds the configuration, honoring the `PWD_DICTIONARY_URL`
    /// environment variable as a base-URL override.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PWD_DICTIONARY_URL")
            .unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// Asynchronous word lookup collaborator.
///
/// Implementations must already be fail-closed: the trait has no error
/// channel, a verdict is always produced.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn is_english_word(&self, word: &str) -> WordVerdict;
}

/// Dictionary client backed by an HTTP lookup-by-word endpoint.
pub struct HttpDictionaryClient {
    http: reqwest::Client,
    config: DictionaryConfig,
}

impl HttpDictionaryClient {
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch(&self, word: &str) -> Result<WordVerdict, DictionaryError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), word);

        let response = tokio::time::timeout(self.config.lookup_timeout, self.http.get(&url).send())
            .await
            .map_err(|_| DictionaryError::Timeout(self.config.lookup_timeout))??;

        verdict_for_status(response.status())
    }
}

impl Default for HttpDictionaryClient {
    fn default() -> Self {
        Self::new(DictionaryConfig::default())
    }
}

/// Maps the service response status to a verdict. Only a clean "not found"
/// means the word is unknown; every other non-success outcome is an error
/// for the caller to degrade.
fn verdict_for_status(status: StatusCode) -> Result<WordVerdict, DictionaryError> {
    if status.is_success() {
        Ok(WordVerdict::English)
    } else if status == StatusCode::NOT_FOUND {
        Ok(WordVerdict::NotEnglish)
    } else {
        Err(DictionaryError::UnexpectedStatus(status))
    }
}

#[async_trait]
impl WordLookup for HttpDictionaryClient {
    async fn is_english_word(&self, word: &str) -> WordVerdict {
        match self.fetch(word).await {
            Ok(verdict) => verdict,
            Err(_error) => {
                // Fail closed: an unreachable or misbehaving service must
                // never approve a password, so the word counts as English.
                #[cfg(feature = "tracing")]
                tracing::warn!("dictionary lookup degraded to English: {}", _error);
                WordVerdict::English
            }
        }
    }
}
