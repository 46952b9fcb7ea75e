// crates/explorer-core/src/session/list.rs
use super::{lock, Lifecycle, LoadStatus};
use crate::config::constants::messages;
use crate::filter::{available_regions, filter_countries};
use crate::gateway::CountryGateway;
use crate::model::Country;
use log::{debug, error, info};
use std::sync::{Arc, Mutex};

type FilterKey = (u64, String, String);

#[derive(Default)]
struct ListInner {
    status: LoadStatus,
    all: Arc<Vec<Country>>,
    /// Bumped whenever `all` is replaced; part of every memo key.
    source_version: u64,
    search_query: String,
    selected_region: String,
    filtered: Option<(FilterKey, Arc<Vec<Country>>)>,
    regions: Option<(u64, Arc<Vec<String>>)>,
}

impl ListInner {
    fn replace_source(&mut self, countries: Vec<Country>) {
        self.all = Arc::new(countries);
        self.source_version += 1;
    }

    fn filtered(&mut self) -> Arc<Vec<Country>> {
        let key = (
            self.source_version,
            self.search_query.clone(),
            self.selected_region.clone(),
        );
        if let Some((k, v)) = &self.filtered {
            if *k == key {
                return Arc::clone(v);
            }
        }
        let out = Arc::new(filter_countries(
            &self.all,
            &self.search_query,
            &self.selected_region,
        ));
        debug!("Filtered to {} countries", out.len());
        self.filtered = Some((key, Arc::clone(&out)));
        out
    }

    fn regions(&mut self) -> Arc<Vec<String>> {
        if let Some((v, r)) = &self.regions {
            if *v == self.source_version {
                return Arc::clone(r);
            }
        }
        let out = Arc::new(available_regions(&self.all));
        self.regions = Some((self.source_version, Arc::clone(&out)));
        out
    }
}

/// The searchable country list page.
///
/// `mount()` fetches the full collection exactly once; the filtered view and
/// region list are derived lazily and recomputed only when the collection or
/// the filter criteria change.
pub struct CountryListSession<G> {
    gateway: G,
    lifecycle: Lifecycle,
    inner: Mutex<ListInner>,
}

impl<G: CountryGateway> CountryListSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            lifecycle: Lifecycle::default(),
            inner: Mutex::new(ListInner::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetches the collection if this session has not loaded yet.
    pub async fn mount(&self) {
        self.load(true).await;
    }

    /// Fetches again, superseding any load still in flight.
    pub async fn retry(&self) {
        self.load(false).await;
    }

    /// Tears the session down; results still in flight are dropped.
    pub fn unmount(&self) {
        self.lifecycle.teardown();
    }

    async fn load(&self, only_if_idle: bool) {
        let ticket = {
            let mut inner = lock(&self.inner);
            if only_if_idle && inner.status != LoadStatus::Idle {
                return;
            }
            let Some(ticket) = self.lifecycle.begin() else {
                return;
            };
            inner.status = LoadStatus::Loading;
            ticket
        };

        let countries = self.gateway.fetch_all_countries().await;

        let mut inner = lock(&self.inner);
        if !self.lifecycle.is_current(ticket) {
            debug!("Discarding country list that arrived after teardown");
            return;
        }
        if countries.is_empty() {
            error!("Failed to load countries: {}", messages::NO_COUNTRIES);
            inner.replace_source(Vec::new());
            inner.status = LoadStatus::Error(messages::NO_COUNTRIES.to_string());
        } else {
            info!("Loaded {} countries into the session", countries.len());
            inner.replace_source(countries);
            inner.status = LoadStatus::Ready;
        }
    }

    // -----------------------------------------------------------------------
    // CRITERIA
    // -----------------------------------------------------------------------

    pub fn set_search_query(&self, query: impl Into<String>) {
        lock(&self.inner).search_query = query.into();
    }

    /// An empty region clears the region filter.
    pub fn set_selected_region(&self, region: impl Into<String>) {
        lock(&self.inner).selected_region = region.into();
    }

    pub fn search_query(&self) -> String {
        lock(&self.inner).search_query.clone()
    }

    pub fn selected_region(&self) -> String {
        lock(&self.inner).selected_region.clone()
    }

    // -----------------------------------------------------------------------
    // VIEWS
    // -----------------------------------------------------------------------

    pub fn state(&self) -> LoadStatus {
        lock(&self.inner).status.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.inner).status.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.inner).status.error().map(str::to_string)
    }

    /// The filtered view for the current criteria.
    pub fn countries(&self) -> Arc<Vec<Country>> {
        lock(&self.inner).filtered()
    }

    pub fn all_countries(&self) -> Arc<Vec<Country>> {
        Arc::clone(&lock(&self.inner).all)
    }

    pub fn available_regions(&self) -> Arc<Vec<String>> {
        lock(&self.inner).regions()
    }

    pub fn total_countries(&self) -> usize {
        lock(&self.inner).all.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.countries().len()
    }
}
