//! Core data models for word-define
//!
//! This module contains the domain types produced by a lookup, the raw
//! provider response they are mapped from, and the mapper between the two.

pub mod mapper;
pub mod oxford;

pub use mapper::map_response;
pub use oxford::{DictionaryProvider, OxfordClient, OxfordResponse};

use serde::{Deserialize, Deserializer, Serialize};

/// The aggregate result of looking up a search term
///
/// Field names on the wire match cache files written by earlier releases,
/// hence the capitalised `Spelling` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Headword as returned by the provider, empty if nothing matched
    #[serde(rename = "Spelling", default)]
    pub spelling: String,
    /// One entry per sense that carried a definition
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Entry>,
}

impl Word {
    /// Returns true when at least one entry was produced
    pub fn has_definition(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// A single definition sense with its examples and etymologies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// First definition string of the sense
    #[serde(default)]
    pub definition: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub examples: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub etymologies: Vec<String>,
}

/// Reads an explicit JSON `null` as the type's default value
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
