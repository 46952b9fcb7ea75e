// crates/explorer-core/src/cache.rs
#![cfg(feature = "compact")]

//! # Collection Cache
//!
//! Best-effort local caching of the full country collection as
//! gzip-compressed bincode. A stale, missing or corrupt cache file is simply
//! bypassed; write failures are ignored. Nothing here can make a fetch fail.

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::gateway::CountryGateway;
use crate::model::Country;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Wraps a gateway and caches successful `fetch_all_countries` results.
///
/// Single and batch lookups pass straight through.
#[derive(Debug, Clone)]
pub struct CachedGateway<G> {
    inner: G,
    path: PathBuf,
    ttl: Duration,
}

impl<G: CountryGateway> CachedGateway<G> {
    pub fn new(inner: G, path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            inner,
            path: path.into(),
            ttl,
        }
    }

    pub fn from_config(inner: G, config: &ExplorerConfig) -> Self {
        Self::new(inner, config.cache_path(), config.cache_ttl)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Removes the cache file, if any.
    pub fn invalidate(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_fresh(&self) -> Option<Vec<Country>> {
        if !is_cache_fresh(&self.path, self.ttl) {
            return None;
        }
        match read_cache(&self.path) {
            Ok(countries) if !countries.is_empty() => {
                info!(
                    "Loaded {} countries from cache {}",
                    countries.len(),
                    self.path.display()
                );
                Some(countries)
            }
            Ok(_) => None,
            Err(e) => {
                debug!("Ignoring unreadable cache {}: {e}", self.path.display());
                None
            }
        }
    }
}

impl<G: CountryGateway> CountryGateway for CachedGateway<G> {
    async fn fetch_all_countries(&self) -> Vec<Country> {
        if let Some(countries) = self.read_fresh() {
            return countries;
        }
        let countries = self.inner.fetch_all_countries().await;
        // Best-effort: an empty result is "unknown" and never cached.
        if !countries.is_empty() {
            if let Err(e) = write_cache(&self.path, &countries) {
                debug!("Could not write cache {}: {e}", self.path.display());
            }
        }
        countries
    }

    async fn fetch_country_by_code(&self, code: &str) -> Option<Country> {
        self.inner.fetch_country_by_code(code).await
    }

    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country> {
        self.inner.fetch_countries_by_codes(codes).await
    }
}

// -----------------------------------------------------------------------------
// FILE HELPERS
// -----------------------------------------------------------------------------

fn is_cache_fresh(path: &Path, ttl: Duration) -> bool {
    let modified = match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match SystemTime::now().duration_since(modified) {
        Ok(age) => age < ttl,
        Err(_) => false,
    }
}

fn read_cache(path: &Path) -> Result<Vec<Country>> {
    let file = File::open(path)?;
    let reader = GzDecoder::new(BufReader::new(file));
    Ok(bincode::deserialize_from(reader)?)
}

fn write_cache(path: &Path, countries: &[Country]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    bincode::serialize_into(&mut encoder, countries)?;
    encoder.finish()?.flush()?;
    Ok(())
}
