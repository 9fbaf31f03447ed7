use dictionary::{Dictionary, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank, nothing was sent.
    Rejected,
    /// The stored results were replaced by this many entries.
    Replaced(usize),
    /// The lookup failed and the stored results were kept.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct Search {
    input: String,
    error: bool,
    results: Vec<Entry>,
}

impl Search {
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn results(&self) -> &[Entry] {
        &self.results
    }

    pub async fn submit(&mut self, dict: &Dictionary) -> SearchOutcome {
        if self.input.trim().is_empty() {
            self.error = true;
            return SearchOutcome::Rejected;
        }
        self.error = false;
        match dict.lookup(&self.input).await {
            Ok(entries) => {
                let words: Vec<&str> = entries.iter().map(|entry| &entry.word[..]).collect();
                tracing::debug!(query = %self.input, ?words, "replacing results");
                self.results = entries;
                SearchOutcome::Replaced(self.results.len())
            }
            Err(error) => {
                tracing::warn!(query = %self.input, %error, "failed to fetch dictionary entries");
                SearchOutcome::Unchanged
            }
        }
    }
}
