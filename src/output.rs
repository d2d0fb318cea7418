//! Plain-text rendering of a looked-up word

use crate::data::Word;

/// Renders a word for the terminal
///
/// Entries are numbered only when there is more than one, and empty example
/// or etymology lists are left out.
pub fn render(word: &Word) -> String {
    let mut out = format!("[ {} ]\n", word.spelling.to_uppercase());
    let numbered = word.entries.len() > 1;

    for (index, entry) in word.entries.iter().enumerate() {
        out.push('\n');

        if numbered {
            out.push_str(&format!("({})\n", index + 1));
        }

        out.push_str(&format!("DEFINITION: {}\n", entry.definition));

        if !entry.examples.is_empty() {
            out.push_str(&format!("EXAMPLES: {}\n", entry.examples.join(" | ")));
        }

        if !entry.etymologies.is_empty() {
            out.push_str(&format!("ETYMOLOGIES: {}\n", entry.etymologies.join(" | ")));
        }
    }

    out
}
