// crates/explorer-core/src/gateway/mod.rs

//! # Remote Data Gateway
//!
//! The seam between page sessions and the remote country catalog.
//!
//! Gateway methods never fail past their own boundary: network errors,
//! non-success statuses and malformed payloads are logged and degrade to an
//! empty collection or `None`. Callers must treat "empty" as "unknown", not
//! as proof that no countries exist.

use crate::model::Country;
use std::sync::Arc;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpGateway;

/// Read access to the country catalog.
///
/// Implementations suspend only at the network boundary; everything else
/// they do is synchronous.
#[allow(async_fn_in_trait)]
pub trait CountryGateway {
    /// The full collection, using the fallback chain on failure.
    async fn fetch_all_countries(&self) -> Vec<Country>;

    /// A single country by its alpha code; not-found and failures are `None`.
    async fn fetch_country_by_code(&self, code: &str) -> Option<Country>;

    /// Several countries by alpha code. An empty slice makes no request.
    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country>;
}

impl<G: CountryGateway + ?Sized> CountryGateway for Arc<G> {
    async fn fetch_all_countries(&self) -> Vec<Country> {
        (**self).fetch_all_countries().await
    }

    async fn fetch_country_by_code(&self, code: &str) -> Option<Country> {
        (**self).fetch_country_by_code(code).await
    }

    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country> {
        (**self).fetch_countries_by_codes(codes).await
    }
}
