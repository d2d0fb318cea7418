//! Lookup flow: cache bypass, hit or miss, then fetch and map

use crate::cache::CacheStore;
use crate::config::Config;
use crate::data::{map_response, DictionaryProvider, Word};
use crate::error::DefineError;

/// Resolves a search term to a `Word`
///
/// The term is lower-cased before it is used as a cache key or sent to the
/// provider. With caching off the cache store is never touched. With caching
/// on, a cached word is returned as is, including words cached with no
/// definitions, which keep failing with `NoDefinitionsFound` until the entry
/// is removed from the cache file. On a miss the fetched word is cached even
/// when empty, and if saving the cache fails the fetched word is dropped and
/// the save error returned.
pub async fn lookup<P, C>(
    search_term: &str,
    config: &Config,
    provider: &P,
    cache: &C,
) -> Result<Word, DefineError>
where
    P: DictionaryProvider + Sync,
    C: CacheStore,
{
    let search_term = search_term.to_lowercase();

    if !config.cache {
        tracing::debug!(term = %search_term, "cache disabled");
        return fetch_word(&search_term, config, provider).await.and_then(require_spelling);
    }

    let mut words = cache.load()?;

    if let Some(word) = words.get(&search_term) {
        tracing::debug!(term = %search_term, "cache hit");
        if !word.has_definition() {
            return Err(DefineError::NoDefinitionsFound);
        }
        return Ok(word.clone());
    }

    tracing::debug!(term = %search_term, "cache miss");
    let word = fetch_word(&search_term, config, provider).await?;

    words.insert(search_term, word.clone());
    cache.save(&words)?;

    require_spelling(word)
}

async fn fetch_word<P>(search_term: &str, config: &Config, provider: &P) -> Result<Word, DefineError>
where
    P: DictionaryProvider + Sync,
{
    let raw = provider.fetch(search_term, config).await?;
    Ok(map_response(&raw))
}

/// An empty spelling means the provider matched nothing
fn require_spelling(word: Word) -> Result<Word, DefineError> {
    if word.spelling.is_empty() {
        return Err(DefineError::NoDefinitionsFound);
    }
    Ok(word)
}
