// crates/explorer-core/src/config.rs

//! Runtime configuration and the fixed values shared across the crate.

use std::path::PathBuf;
use std::time::Duration;

// -----------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------

pub mod constants {
    /// REST Countries v3.1 root.
    pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

    /// Last-resort endpoint used when both `/all` requests fail.
    pub const DEFAULT_ALTERNATIVE_URL: &str =
        "https://restcountries.com/v3.1/independent?status=true";

    /// Reduced field set requested for the list view.
    pub const LIST_FIELDS: &str = "name,flags,population,region,capital,cca3";

    /// Code used by the connectivity probe.
    pub const PROBE_CODE: &str = "usa";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// One hour, matching the search cache duration.
    pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

    pub const MAX_HISTORY_ITEMS: usize = 10;
    pub const MAX_COMPARISON_ITEMS: usize = 2;
    pub const MAX_QUERY_CHARS: usize = 100;

    pub mod storage_keys {
        pub const SEARCH_HISTORY: &str = "searchHistory";
        pub const THEME: &str = "theme";
        // Reserved; nothing reads or writes these yet.
        pub const CACHED_IP_LOOKUPS: &str = "worldExplorerIPCache";
        pub const MAP_PREFERENCES: &str = "worldExplorerMapPrefs";
        pub const LAST_LOCATION: &str = "worldExplorerLastLocation";
    }

    pub mod map {
        pub const DEFAULT_CENTER: [f64; 2] = [0.0, 0.0];
        pub const DEFAULT_ZOOM: u8 = 2;
        pub const MIN_ZOOM: u8 = 2;
        pub const MAX_ZOOM: u8 = 18;
        pub const COUNTRY_ZOOM: u8 = 5;
        pub const CITY_ZOOM: u8 = 12;
        pub const IP_LOCATION_ZOOM: u8 = 13;
    }

    pub mod messages {
        pub const NO_COUNTRIES: &str = "No countries data received";
        pub const NO_COUNTRY_CODE: &str = "No country code provided";
        pub const COUNTRY_NOT_FOUND: &str = "Country not found";
        pub const EMPTY_SEARCH: &str = "Please enter a country name or IP address";
        pub const INVALID_COUNTRY: &str = "Please enter a valid country name";
        pub const NO_MATCHING_COUNTRY: &str = "Country not found. Try a different spelling.";
    }
}

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Settings shared by the gateway, the disk cache and the file storage.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub base_url: String,
    pub alternative_url: String,
    /// Applied to every gateway request; expiry counts as a network failure.
    pub timeout: Duration,
    pub cache_ttl: Duration,
    /// Directory for persisted key/value entries and the collection cache.
    pub data_dir: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            alternative_url: constants::DEFAULT_ALTERNATIVE_URL.to_string(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(constants::DEFAULT_CACHE_TTL_SECS),
            data_dir: Self::default_data_dir(),
        }
    }
}

impl ExplorerConfig {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(".country-explorer")
    }

    /// Points both the catalog and the alternative endpoint at `base_url`.
    ///
    /// Used for mirrors and test servers that serve the same v3.1 layout.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        self.alternative_url = format!("{base}/independent?status=true");
        self.base_url = base;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("countries.comp.bin")
    }
}
