//! Maps the Oxford response shape onto `Word` and `Entry`

use super::oxford::{OxfordEntry, OxfordResponse, OxfordSense};
use super::{Entry, Word};

/// Converts a raw provider response into a `Word`
///
/// Walks results, lexical entries, dictionary entries and senses in order and
/// emits one `Entry` per sense that has a definition. A response with no
/// usable senses yields a `Word` with no entries; deciding whether that is an
/// error is up to the caller.
pub fn map_response(raw: &OxfordResponse) -> Word {
    let entries = raw
        .results
        .iter()
        .flat_map(|result| &result.lexical_entries)
        .flat_map(|lexical| &lexical.entries)
        .flat_map(|entry| entry.senses.iter().filter_map(move |sense| make_entry(entry, sense)))
        .collect();

    Word {
        spelling: raw.word.clone(),
        entries,
    }
}

/// Builds an entry for one sense, or `None` when the sense has no definition
///
/// Etymologies belong to the dictionary entry and are repeated on every one of
/// its senses. Examples are always taken from the entry's first sense, not from
/// `sense`; cached words depend on this shape.
fn make_entry(entry: &OxfordEntry, sense: &OxfordSense) -> Option<Entry> {
    let definition = sense.definitions.first()?.clone();

    let examples = entry
        .senses
        .first()
        .map(|first| first.examples.iter().map(|e| e.text.clone()).collect())
        .unwrap_or_default();

    Some(Entry {
        definition,
        examples,
        etymologies: entry.etymologies.clone(),
    })
}
