//! Oxford Dictionaries API client
//!
//! This module provides the raw response shape returned by the Oxford
//! Dictionaries entries endpoint and a client that fetches it.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::Config;
use crate::error::DefineError;

/// Base URL for the Oxford Dictionaries entries endpoint
const OXFORD_BASE_URL: &str = "https://od-api.oxforddictionaries.com/api/v2/entries/en-gb";

/// Source of raw dictionary data for a search term
///
/// The lookup flow only depends on this trait, so tests can substitute a
/// provider that never touches the network.
#[async_trait]
pub trait DictionaryProvider {
    /// Fetch the raw provider response for a single search term
    async fn fetch(&self, search_term: &str, config: &Config)
        -> Result<OxfordResponse, DefineError>;
}

/// Client for fetching entries from the Oxford Dictionaries API
#[derive(Debug, Clone)]
pub struct OxfordClient {
    client: Client,
    base_url: String,
}

impl Default for OxfordClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OxfordClient {
    /// Create a new OxfordClient pointing at the public API
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OXFORD_BASE_URL.to_string(),
        }
    }

    /// Create a new OxfordClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds the entry URL, escaping the search term as one path segment
    fn entry_url(&self, search_term: &str) -> Result<Url, DefineError> {
        let invalid = || DefineError::Config(format!("invalid provider url: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(search_term);
        url.set_query(Some("strictMatch=false"));

        Ok(url)
    }
}

#[async_trait]
impl DictionaryProvider for OxfordClient {
    /// Issues a single GET and decodes the body, whatever the status code
    ///
    /// Error bodies such as `{"error": "No entry found"}` decode into an empty
    /// response, which the lookup reports as "no definitions found".
    async fn fetch(
        &self,
        search_term: &str,
        config: &Config,
    ) -> Result<OxfordResponse, DefineError> {
        let url = self.entry_url(search_term)?;
        tracing::debug!(%url, "fetching entry");

        let response = self
            .client
            .get(url)
            .header("app_id", &config.app_id)
            .header("app_key", &config.app_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "provider responded");

        let text = response.text().await?;
        let raw: OxfordResponse = serde_json::from_str(&text)?;

        Ok(raw)
    }
}

/// Top-level Oxford API response structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OxfordResponse {
    pub id: String,
    pub metadata: Metadata,
    pub results: Vec<HeadwordEntry>,
    pub word: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub operation: String,
    pub provider: String,
    pub schema: String,
}

/// One headword match within a response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadwordEntry {
    pub id: String,
    pub language: String,
    pub lexical_entries: Vec<LexicalEntry>,
    #[serde(rename = "type")]
    pub kind: String,
    pub word: String,
}

/// Entries grouped by lexical category (noun, verb, ...)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexicalEntry {
    pub entries: Vec<OxfordEntry>,
    pub language: String,
    pub lexical_category: IdText,
    pub phrases: Vec<IdText>,
    pub text: String,
}

/// A dictionary entry: etymologies and pronunciations shared by its senses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OxfordEntry {
    pub etymologies: Vec<String>,
    pub homograph_number: String,
    pub pronunciations: Vec<Pronunciation>,
    pub senses: Vec<OxfordSense>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pronunciation {
    pub audio_file: String,
    pub dialects: Vec<String>,
    pub phonetic_notation: String,
    pub phonetic_spelling: String,
}

/// A single sense; subsenses share the same shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OxfordSense {
    pub definitions: Vec<String>,
    pub domain_classes: Vec<IdText>,
    pub examples: Vec<SenseExample>,
    pub id: String,
    pub semantic_classes: Vec<IdText>,
    pub short_definitions: Vec<String>,
    pub registers: Vec<IdText>,
    pub subsenses: Vec<OxfordSense>,
    pub synonyms: Vec<Synonym>,
    pub thesaurus_links: Vec<ThesaurusLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SenseExample {
    pub text: String,
    pub registers: Vec<IdText>,
}

/// The `{id, text}` pair used for categories, classes and registers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdText {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Synonym {
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThesaurusLink {
    pub entry_id: String,
    pub sense_id: String,
}
