// https://dictionaryapi.dev/ - free, no key, english only. `phonetics` usually
// carries the audio entry first and the IPA text entry second.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    dictionary::{Definition, Entry, License, Meaning, Phonetic},
    DictionaryError, NotFoundError,
};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEntry {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
    #[serde(default)]
    source_urls: Option<Vec<String>>,
    #[serde(default)]
    license: Option<ApiLicense>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiLicense {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
}

// the service sends "" instead of leaving a field out
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl From<ApiEntry> for Entry {
    fn from(entry: ApiEntry) -> Self {
        Entry {
            word: entry.word,
            phonetic: non_empty(entry.phonetic),
            phonetics: entry.phonetics.into_iter().map(Phonetic::from).collect(),
            meanings: entry.meanings.into_iter().map(Meaning::from).collect(),
            source_urls: entry.source_urls.unwrap_or_default(),
            license: entry.license.map(|license| License {
                name: license.name,
                url: license.url,
            }),
        }
    }
}

impl From<ApiPhonetic> for Phonetic {
    fn from(phonetic: ApiPhonetic) -> Self {
        Phonetic {
            text: non_empty(phonetic.text),
            audio: non_empty(phonetic.audio),
        }
    }
}

impl From<ApiMeaning> for Meaning {
    fn from(meaning: ApiMeaning) -> Self {
        Meaning {
            part_of_speech: meaning.part_of_speech.into(),
            definitions: meaning.definitions.into_iter().map(Definition::from).collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

impl From<ApiDefinition> for Definition {
    fn from(definition: ApiDefinition) -> Self {
        Definition {
            definition: definition.definition,
            example: non_empty(definition.example),
            synonyms: definition.synonyms,
            antonyms: definition.antonyms,
        }
    }
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Entry>, DictionaryError> {
    // the word goes into the path as typed; reqwest's url parser does any escaping
    let url = format!("{base_url}/{word}");
    tracing::debug!(%url, "requesting dictionary entries");
    let res: reqwest::Response = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    tracing::debug!(%status, "dictionary service responded");
    match status {
        StatusCode::OK => {
            let entries = res
                .json::<Vec<ApiEntry>>()
                .await
                .map_err(DictionaryError::Deserialize)?;
            Ok(entries.into_iter().map(Entry::from).collect())
        }
        StatusCode::NOT_FOUND => {
            let error = res.json::<NotFoundError>().await.unwrap_or_default();
            Err(DictionaryError::NotFound(error))
        }
        other => Err(DictionaryError::Status(other)),
    }
}
