//! Error type shared by every stage of a lookup

use thiserror::Error;

/// Errors that can occur while resolving a word
///
/// Every failure is returned to `main` unchanged; the CLI prints the message
/// and exits with status 1.
#[derive(Debug, Error)]
pub enum DefineError {
    /// No positional argument was given
    #[error("no search term provided")]
    NoSearchTerm,

    /// The config file lacks an app key or app id
    #[error("config invalid. must have a valid app key and id")]
    InvalidConfig,

    /// The lookup succeeded but produced nothing usable
    #[error("no definitions found")]
    NoDefinitionsFound,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Cache file could not be read or written
    #[error("cache error: {0}")]
    Cache(String),

    /// Config file could not be read or written
    #[error("config error: {0}")]
    Config(String),
}
