use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    pub source_urls: Vec<String>,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// Any tag the service sends that is not one of the above.
    Other(String),
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Other(tag) => tag,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        match &tag[..] {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Other(tag),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// Keeps the first entry for every distinct `word`, in the order received.
pub fn unique_by_word(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.word.clone()))
        .collect()
}
