// crates/explorer-core/src/prelude.rs

//! Common imports for applications built on explorer-core.

#[cfg(feature = "compact")]
pub use crate::cache::CachedGateway;
pub use crate::config::ExplorerConfig;
pub use crate::error::{ExplorerError, Result};
pub use crate::filter::{
    available_regions, filter_countries, find_by_code, find_by_name, NameMatch,
};
pub use crate::gateway::CountryGateway;
#[cfg(feature = "http")]
pub use crate::gateway::HttpGateway;
pub use crate::model::Country;
pub use crate::session::{
    BorderState, CountryDetailSession, CountryListSession, DetailState, LoadStatus,
};
pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use crate::store::{Action, GeoState, GeoStore, HistoryEntry, LocationItem};
pub use crate::theme::Theme;
pub use crate::validate::{classify_search_type, sanitize, SearchType};
