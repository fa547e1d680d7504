//! HTTP clients for the public dictionary and translation services

use super::{Definition, Meaning, WordLookup};
use crate::error::ServiceError;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Entry as returned by dictionaryapi.dev
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    meanings: Vec<EntryMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationResponse {
    response_data: TranslationData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationData {
    translated_text: String,
}

/// Flatten dictionary entries into meanings, carrying each entry's phonetic
fn meanings_from_entries(entries: Vec<Entry>) -> Vec<Meaning> {
    entries
        .into_iter()
        .flat_map(|entry| {
            let phonetic = entry.phonetic;
            entry.meanings.into_iter().map(move |m| Meaning {
                part_of_speech: m.part_of_speech,
                phonetic: phonetic.clone(),
                definitions: m.definitions,
            })
        })
        .collect()
}

pub struct HttpLookup {
    client: Client,
    dictionary_url: String,
    translation_url: String,
    language_pair: String,
}

impl HttpLookup {
    /// # Errors
    /// Returns `NetworkUnavailable` if the HTTP client cannot be built.
    pub fn new(
        dictionary_url: impl Into<String>,
        translation_url: impl Into<String>,
        language_pair: impl Into<String>,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::NetworkUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            dictionary_url: dictionary_url.into(),
            translation_url: translation_url.into(),
            language_pair: language_pair.into(),
        })
    }
}

fn unavailable(e: &reqwest::Error) -> ServiceError {
    ServiceError::LookupUnavailable(e.to_string())
}

impl WordLookup for HttpLookup {
    fn define(&self, word: &str) -> Result<Vec<Meaning>, ServiceError> {
        let url = format!("{}/{word}", self.dictionary_url.trim_end_matches('/'));
        let entries: Vec<Entry> = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.json::<Vec<Entry>>())
            .map_err(|e| unavailable(&e))?;

        Ok(meanings_from_entries(entries))
    }

    fn translate(&self, word: &str) -> Result<String, ServiceError> {
        let response: TranslationResponse = self
            .client
            .get(&self.translation_url)
            .query(&[("q", word), ("langpair", self.language_pair.as_str())])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.json::<TranslationResponse>())
            .map_err(|e| unavailable(&e))?;

        Ok(response.response_data.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY_SAMPLE: &str = r#"[
        {
            "word": "crane",
            "phonetic": "/kɹeɪn/",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "A large wading bird.", "example": "A crane stood in the reeds." },
                        { "definition": "A machine for lifting heavy loads." }
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [{ "definition": "To stretch one's neck." }]
                }
            ]
        },
        { "word": "crane", "meanings": [] }
    ]"#;

    #[test]
    fn parses_dictionary_entries() {
        let entries: Vec<Entry> = serde_json::from_str(DICTIONARY_SAMPLE).unwrap();
        let meanings = meanings_from_entries(entries);

        assert_eq!(meanings.len(), 2);
        assert_eq!(meanings[0].part_of_speech, "noun");
        assert_eq!(meanings[0].phonetic.as_deref(), Some("/kɹeɪn/"));
        assert_eq!(meanings[0].definitions.len(), 2);
        assert_eq!(
            meanings[0].definitions[0].example.as_deref(),
            Some("A crane stood in the reeds.")
        );
        assert!(meanings[0].definitions[1].example.is_none());
        assert_eq!(meanings[1].part_of_speech, "verb");
    }

    #[test]
    fn parses_translation_response() {
        let json = r#"{ "responseData": { "translatedText": "सारस", "match": 1 }, "responseStatus": 200 }"#;
        let response: TranslationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_data.translated_text, "सारस");
    }
}
