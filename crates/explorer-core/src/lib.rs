// crates/explorer-core/src/lib.rs

//! # explorer-core
//!
//! Client-side pipeline behind the country explorer: a remote catalog
//! gateway with fallback requests, a pure filter engine, page sessions with
//! fetch-on-mount semantics, and a reducer-based geo search store that
//! persists its history through an injected storage port.
//!
//! ```no_run
//! use explorer_core::prelude::*;
//!
//! # async fn run() -> explorer_core::Result<()> {
//! let gateway = HttpGateway::new(&ExplorerConfig::default())?;
//! let session = CountryListSession::new(gateway);
//! session.mount().await;
//! session.set_selected_region("Europe");
//! for country in session.countries().iter() {
//!     println!("{} ({})", country.common_name(), country.cca3);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "compact")]
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod model;
pub mod prelude;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;
pub mod validate;

// Re-exports
pub use crate::config::ExplorerConfig;
pub use crate::error::{ExplorerError, Result};
pub use crate::filter::{available_regions, filter_countries};
pub use crate::gateway::CountryGateway;
#[cfg(feature = "http")]
pub use crate::gateway::HttpGateway;
pub use crate::model::Country;
pub use crate::validate::{classify_search_type, sanitize, SearchType};
