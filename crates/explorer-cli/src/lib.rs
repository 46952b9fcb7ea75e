//! explorer-cli
//! ============
//!
//! Command-line interface for the `explorer-core` country catalog client.
//!
//! This crate primarily provides a binary (`country-explorer`). The library
//! target exists so that docs.rs renders a documentation page with this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install explorer-cli
//! country-explorer --help
//! country-explorer countries --region Europe
//! country-explorer country PER
//! country-explorer search "new zealand"
//! country-explorer compare DEU FRA
//! ```
//!
//! For programmatic access use the [`explorer-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
