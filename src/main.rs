//! word-define - Look up word definitions from the command line
//!
//! Fetches definitions from the Oxford Dictionaries API, optionally keeping
//! every result in a local JSON cache so repeat lookups skip the network.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use word_define::cache::CacheManager;
use word_define::cli::Cli;
use word_define::config::ConfigFile;
use word_define::data::{OxfordClient, Word};
use word_define::lookup::lookup;
use word_define::output;
use word_define::DefineError;

/// Logs go to stderr so stdout only ever carries the result or the error
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<Word, DefineError> {
    let search_term = cli.search_term()?;

    let config_file = ConfigFile::new()
        .ok_or_else(|| DefineError::Config("could not determine the user config directory".to_string()))?;
    let config = config_file.load()?;

    if !config.is_valid() {
        return Err(DefineError::InvalidConfig);
    }

    let cache = CacheManager::new()
        .ok_or_else(|| DefineError::Cache("could not determine the user cache directory".to_string()))?;
    let provider = OxfordClient::new();

    lookup(search_term, &config, &provider, &cache).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Usage errors follow the same stdout and exit 1 contract as lookup errors
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            print!("{}", e);
            return ExitCode::from(1);
        }
    };

    match run(&cli).await {
        Ok(word) => {
            print!("{}", output::render(&word));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::from(1)
        }
    }
}
