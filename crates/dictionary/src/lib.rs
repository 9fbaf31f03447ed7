use std::fmt;

use dictionary_api::get_entries;
use serde::Deserialize;

mod dictionary;
mod dictionary_api;

pub use dictionary::{unique_by_word, Definition, Entry, License, Meaning, PartOfSpeech, Phonetic};
pub use dictionary_api::DEFAULT_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to read the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("the dictionary service responded with {0}")]
    Status(reqwest::StatusCode),
}

/// Body the service sends along with a 404.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotFoundError {
    pub title: String,
    pub message: String,
    pub resolution: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("no definitions found")
        } else {
            f.write_str(&self.message)
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every entry the service returns for `word`, duplicates included.
    pub async fn get_entries(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }

    /// Like [`Dictionary::get_entries`], keeping only the first entry per word.
    pub async fn lookup(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        self.get_entries(word).await.map(unique_by_word)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
