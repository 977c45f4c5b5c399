use std::path::PathBuf;

use anyhow::{bail, Result};

const DEFAULT_DICTIONARY: &str = "words.txt";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Shell configuration, taken from the command line and `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub log_filter: String,
    pub show_help: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_args(std::env::args().skip(1))?;
        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }

    /// Parse arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut dictionary_path = None;
        let mut show_help = false;

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => show_help = true,
                flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
                path => {
                    if dictionary_path.is_some() {
                        bail!("only one word list can be given, got extra argument {path:?}");
                    }
                    dictionary_path = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Config {
            dictionary_path: dictionary_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_help,
        })
    }
}
