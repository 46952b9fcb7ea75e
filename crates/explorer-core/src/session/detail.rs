// crates/explorer-core/src/session/detail.rs
use super::{lock, Lifecycle, Ticket};
use crate::config::constants::messages;
use crate::gateway::CountryGateway;
use crate::model::Country;
use log::{debug, error, info, warn};
use std::sync::Mutex;

/// Border countries, nested inside a ready detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderState {
    Loading,
    Loaded(Vec<Country>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Ready {
        country: Box<Country>,
        borders: BorderState,
    },
    Error(String),
}

/// The single-country page, parameterized by an alpha code.
///
/// A border-country failure never turns the page into an error: the borders
/// simply resolve to an empty list.
pub struct CountryDetailSession<G> {
    gateway: G,
    lifecycle: Lifecycle,
    state: Mutex<DetailState>,
}

impl<G: CountryGateway> CountryDetailSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            lifecycle: Lifecycle::default(),
            state: Mutex::new(DetailState::Idle),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Loads `code` (on mount or when the code changes).
    ///
    /// A missing or blank code sets "No country code provided" without
    /// touching the gateway. A newer call supersedes an older one still in
    /// flight.
    pub async fn load(&self, code: Option<&str>) {
        let Some(ticket) = self.lifecycle.begin() else {
            return;
        };

        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            self.apply(ticket, DetailState::Error(messages::NO_COUNTRY_CODE.into()));
            return;
        };

        self.apply(ticket, DetailState::Loading);
        info!("Loading details for country: {code}");

        let Some(country) = self.gateway.fetch_country_by_code(code).await else {
            error!("Failed to load country details for {code}");
            self.apply(ticket, DetailState::Error(messages::COUNTRY_NOT_FOUND.into()));
            return;
        };

        let border_codes = country.borders.clone();
        let borders = if border_codes.is_empty() {
            BorderState::Loaded(Vec::new())
        } else {
            BorderState::Loading
        };
        info!("Loaded country: {}", country.common_name());
        if !self.apply(
            ticket,
            DetailState::Ready {
                country: Box::new(country),
                borders,
            },
        ) || border_codes.is_empty()
        {
            return;
        }

        let fetched = self.gateway.fetch_countries_by_codes(&border_codes).await;
        if fetched.is_empty() {
            warn!("Failed to load border countries for {code}");
        } else {
            info!("Loaded {} border countries", fetched.len());
        }

        let mut state = lock(&self.state);
        if !self.lifecycle.is_current(ticket) {
            debug!("Discarding border countries for {code}");
            return;
        }
        if let DetailState::Ready { borders, .. } = &mut *state {
            *borders = BorderState::Loaded(fetched);
        }
    }

    /// Tears the session down; results still in flight are dropped.
    pub fn unmount(&self) {
        self.lifecycle.teardown();
    }

    /// Replaces the state if `ticket` is still the newest attempt.
    fn apply(&self, ticket: Ticket, next: DetailState) -> bool {
        let mut state = lock(&self.state);
        if !self.lifecycle.is_current(ticket) {
            debug!("Discarding stale country detail update");
            return false;
        }
        *state = next;
        true
    }

    // -----------------------------------------------------------------------
    // VIEWS
    // -----------------------------------------------------------------------

    pub fn state(&self) -> DetailState {
        lock(&self.state).clone()
    }

    pub fn country(&self) -> Option<Country> {
        match &*lock(&self.state) {
            DetailState::Ready { country, .. } => Some((**country).clone()),
            _ => None,
        }
    }

    pub fn border_countries(&self) -> Vec<Country> {
        match &*lock(&self.state) {
            DetailState::Ready {
                borders: BorderState::Loaded(list),
                ..
            } => list.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(*lock(&self.state), DetailState::Loading)
    }

    pub fn is_borders_loading(&self) -> bool {
        matches!(
            *lock(&self.state),
            DetailState::Ready {
                borders: BorderState::Loading,
                ..
            }
        )
    }

    pub fn error(&self) -> Option<String> {
        match &*lock(&self.state) {
            DetailState::Error(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn has_borders(&self) -> bool {
        !self.border_countries().is_empty()
    }

    pub fn is_valid_country(&self) -> bool {
        matches!(*lock(&self.state), DetailState::Ready { .. })
    }
}
