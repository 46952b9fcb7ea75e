// crates/explorer-core/src/session/test_support.rs
use crate::gateway::CountryGateway;
use crate::model::Country;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub(crate) fn country(name: &str, region: &str, code: &str, borders: &[&str]) -> Country {
    let mut c = Country::default();
    c.name.common = name.to_string();
    c.region = region.to_string();
    c.cca3 = code.to_string();
    c.borders = borders.iter().map(|b| b.to_string()).collect();
    c
}

/// In-memory gateway with call counters and optional gates that hold a
/// request open until the test releases it.
#[derive(Default)]
pub(crate) struct MockGateway {
    pub all: Vec<Country>,
    pub by_code: HashMap<String, Country>,
    pub gate: Option<Arc<Notify>>,
    pub border_gate: Option<Arc<Notify>>,
    pub calls_all: AtomicUsize,
    pub calls_one: AtomicUsize,
    pub calls_many: AtomicUsize,
}

impl MockGateway {
    pub fn with_countries(countries: Vec<Country>) -> Self {
        let by_code = countries
            .iter()
            .map(|c| (c.cca3.clone(), c.clone()))
            .collect();
        Self {
            all: countries,
            by_code,
            ..Default::default()
        }
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

impl CountryGateway for MockGateway {
    async fn fetch_all_countries(&self) -> Vec<Country> {
        self.calls_all.fetch_add(1, Ordering::SeqCst);
        if let Some(g) = &self.gate {
            g.notified().await;
        }
        self.all.clone()
    }

    async fn fetch_country_by_code(&self, code: &str) -> Option<Country> {
        self.calls_one.fetch_add(1, Ordering::SeqCst);
        if let Some(g) = &self.gate {
            g.notified().await;
        }
        self.by_code.get(&code.to_uppercase()).cloned()
    }

    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country> {
        self.calls_many.fetch_add(1, Ordering::SeqCst);
        if let Some(g) = &self.border_gate {
            g.notified().await;
        }
        codes
            .iter()
            .filter_map(|c| self.by_code.get(c).cloned())
            .collect()
    }
}
