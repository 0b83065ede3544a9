//! Command line configuration

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::{Args, Parser};

use grocery_deals::{EXAMPLE_LIST, stores::Store};

pub(crate) mod error;
pub(crate) mod logging;

/// Grocery Deals configuration
#[derive(Debug, Parser)]
#[command(
    name = "grocery-deals",
    about = "Split a grocery list across stores so each item is bought where it is cheapest",
    long_about = None
)]
pub(crate) struct Config {
    /// Stores to shop at (repeat the flag or separate with commas)
    #[arg(
        short,
        long = "store",
        env = "GROCERY_STORES",
        value_enum,
        value_delimiter = ',',
        default_values_t = [Store::GiantEagle, Store::Kuhns]
    )]
    pub stores: Vec<Store>,

    /// Grocery list file, one item per line with an optional `xN` quantity.
    /// Reads standard input when omitted or `-`.
    #[arg(short, long, conflicts_with = "example")]
    pub list: Option<PathBuf>,

    /// Use the built-in example list
    #[arg(long)]
    pub example: bool,

    /// YAML price catalog to use instead of the built-in one
    #[arg(short, long, env = "GROCERY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Read the grocery list text selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the list file or standard input cannot be read.
    pub fn read_list(&self) -> io::Result<String> {
        if self.example {
            return Ok(EXAMPLE_LIST.to_string());
        }

        match self.list.as_deref() {
            Some(path) if path != Path::new("-") => fs::read_to_string(path),
            _ => io::read_to_string(io::stdin()),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
