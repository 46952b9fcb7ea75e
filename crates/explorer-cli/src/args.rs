// crates/explorer-cli/src/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for country-explorer
#[derive(Debug, Parser)]
#[command(
    name = "country-explorer",
    version,
    about = "Browse, search and compare countries from the REST Countries catalog"
)]
pub struct CliArgs {
    /// Catalog base URL (default: https://restcountries.com/v3.1)
    #[arg(long = "base-url", env = "COUNTRY_EXPLORER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "COUNTRY_EXPLORER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Directory for history, theme and the catalog cache
    #[arg(long = "data-dir", env = "COUNTRY_EXPLORER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Always fetch the catalog instead of using the on-disk cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Log filter, e.g. `debug` or `explorer_core=trace` (overrides RUST_LOG)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries, optionally filtered by name and region
    Countries {
        /// Case-insensitive substring of the common name
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,

        /// Exact region name (e.g. Europe)
        #[arg(short = 'r', long = "region", default_value = "")]
        region: String,
    },

    /// List the regions present in the catalog
    Regions,

    /// Show details and border countries for a country code
    Country {
        /// cca3 or cca2 code (e.g. PER, de)
        code: String,
    },

    /// Tell whether a query looks like an IP address or a country name
    Classify { query: String },

    /// Run a search and record it in the history
    Search { query: String },

    /// Show the recent search history
    History {
        /// Remove all stored entries
        #[arg(long)]
        clear: bool,
    },

    /// Compare countries side by side (the last two codes are kept)
    Compare {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeCommand::Show)]
        action: ThemeCommand,
    },

    /// Check that the catalog is reachable
    Ping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeCommand {
    Show,
    Toggle,
    Dark,
    Light,
}
