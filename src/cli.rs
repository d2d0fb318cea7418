//! Command-line interface parsing for word-define
//!
//! The tool looks up the first positional argument and ignores any that
//! follow. A missing term is reported through `DefineError::NoSearchTerm` so
//! it is printed and exits like every other failure.

use clap::Parser;

use crate::error::DefineError;

/// word-define - Look up the definition of a word
#[derive(Parser, Debug)]
#[command(name = "word-define")]
#[command(about = "Look up word definitions from the Oxford Dictionaries API")]
#[command(version)]
pub struct Cli {
    /// Word to look up; only the first one is used
    ///
    /// Looked up case-insensitively. Set `"cache": true` in the config file to
    /// keep results in the local cache.
    #[arg(value_name = "TERM", num_args = 0.., trailing_var_arg = true)]
    pub terms: Vec<String>,
}

impl Cli {
    /// Returns the first term, or `NoSearchTerm` if none was given
    pub fn search_term(&self) -> Result<&str, DefineError> {
        self.terms
            .first()
            .map(String::as_str)
            .ok_or(DefineError::NoSearchTerm)
    }
}
