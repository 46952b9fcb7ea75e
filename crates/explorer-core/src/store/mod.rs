// crates/explorer-core/src/store/mod.rs

//! # Geo Search Store
//!
//! Holds the search query, the bounded search history, the map viewport and
//! the comparison set. State changes go through [`transition`], a pure
//! function; persistence is requested as an [`Effect`] and carried out by
//! [`GeoStore`] through its injected [`KeyValueStorage`].
//!
//! Storage failures are logged and never affect the in-memory state.
//!
//! ```rust
//! use explorer_core::storage::MemoryStorage;
//! use explorer_core::store::{GeoStore, HistoryEntry, LocationItem};
//! use explorer_core::SearchType;
//!
//! let mut store = GeoStore::new(MemoryStorage::new());
//! store.add_to_history(HistoryEntry::new("peru", SearchType::Country, None));
//! store.add_comparison_item(LocationItem::new("PER", "Peru"));
//! assert_eq!(store.state().search_history.len(), 1);
//! assert!(store.state().comparison_mode);
//! ```

mod action;
mod state;

pub use action::{Action, Effect};
pub use state::{GeoPoint, GeoState, HistoryEntry, LocationItem, MapView};

use crate::config::constants::{messages, storage_keys, MAX_COMPARISON_ITEMS, MAX_HISTORY_ITEMS};
use crate::error::{ExplorerError, Result};
use crate::storage::KeyValueStorage;
use crate::validate::{classify_search_type, sanitize, SearchType};
use log::{debug, error};
use serde_json::Value;

// -----------------------------------------------------------------------------
// REDUCER
// -----------------------------------------------------------------------------

/// Applies `action` to `state`, returning the next state and any effect.
pub fn transition(state: GeoState, action: &Action) -> (GeoState, Option<Effect>) {
    match action {
        Action::SetSearchQuery(q) => (
            GeoState {
                search_query: q.clone(),
                ..state
            },
            None,
        ),
        Action::SetSearchResults {
            results,
            search_type,
        } => (
            GeoState {
                search_results: Some(results.clone()),
                search_type: Some(*search_type),
                is_searching: false,
                search_error: None,
                ..state
            },
            None,
        ),
        Action::SetSearchError(msg) => (
            GeoState {
                search_error: Some(msg.clone()),
                is_searching: false,
                search_results: None,
                ..state
            },
            None,
        ),
        Action::SetIsSearching(flag) => (
            GeoState {
                is_searching: *flag,
                ..state
            },
            None,
        ),
        Action::AddToHistory(entry) => {
            let mut history = Vec::with_capacity(MAX_HISTORY_ITEMS);
            history.push(entry.clone());
            history.extend(state.search_history.iter().take(MAX_HISTORY_ITEMS - 1).cloned());
            let effect = Effect::PersistHistory(history.clone());
            (
                GeoState {
                    search_history: history,
                    ..state
                },
                Some(effect),
            )
        }
        Action::ClearHistory => (
            GeoState {
                search_history: Vec::new(),
                ..state
            },
            Some(Effect::RemoveHistory),
        ),
        Action::SetUserLocation { location, ip } => (
            GeoState {
                user_location: *location,
                user_ip: ip.clone(),
                ..state
            },
            None,
        ),
        Action::SetMapView { center, zoom } => (
            GeoState {
                map_view: MapView {
                    center: *center,
                    zoom: *zoom,
                },
                ..state
            },
            None,
        ),
        Action::SetSelectedLocation(loc) => (
            GeoState {
                selected_location: loc.clone(),
                ..state
            },
            None,
        ),
        Action::AddComparisonItem(item) => {
            let mut items = state.comparison_items;
            items.push(item.clone());
            let overflow = items.len().saturating_sub(MAX_COMPARISON_ITEMS);
            items.drain(..overflow);
            (
                GeoState {
                    comparison_items: items,
                    comparison_mode: true,
                    ..state
                },
                None,
            )
        }
        Action::RemoveComparisonItem(id) => {
            let mut items = state.comparison_items;
            items.retain(|it| &it.id != id);
            (
                GeoState {
                    comparison_mode: !items.is_empty(),
                    comparison_items: items,
                    ..state
                },
                None,
            )
        }
        Action::ClearComparison => (
            GeoState {
                comparison_mode: false,
                comparison_items: Vec::new(),
                ..state
            },
            None,
        ),
        Action::Unknown => (state, None),
    }
}

// -----------------------------------------------------------------------------
// STORE
// -----------------------------------------------------------------------------

/// Reducer-driven store with an injected storage port.
pub struct GeoStore<S: KeyValueStorage> {
    state: GeoState,
    storage: S,
}

impl<S: KeyValueStorage> GeoStore<S> {
    /// Creates the store and replays persisted history into it.
    ///
    /// Each stored entry goes through the regular add-to-history path, oldest
    /// first, so the resulting list equals the stored one.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            state: GeoState::default(),
            storage,
        };
        match store.load_history() {
            Ok(entries) => {
                for entry in entries.into_iter().rev() {
                    store.dispatch(Action::AddToHistory(entry));
                }
            }
            Err(e) => error!("Failed to load search history: {e}"),
        }
        store
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        match self.storage.get_item(storage_keys::SEARCH_HISTORY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn state(&self) -> &GeoState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Runs one action. Always succeeds; storage errors are only logged.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {action:?}");
        let (next, effect) = transition(std::mem::take(&mut self.state), &action);
        self.state = next;
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistHistory(history) => {
                let outcome = serde_json::to_string(&history)
                    .map_err(ExplorerError::from)
                    .and_then(|json| {
                        self.storage
                            .set_item(storage_keys::SEARCH_HISTORY, &json)
                    });
                if let Err(e) = outcome {
                    error!("Failed to save search history: {e}");
                }
            }
            Effect::RemoveHistory => {
                if let Err(e) = self.storage.remove_item(storage_keys::SEARCH_HISTORY) {
                    error!("Failed to clear search history: {e}");
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // ACTION HELPERS
    // -----------------------------------------------------------------------

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetSearchQuery(query.into()));
    }

    pub fn set_search_results(&mut self, results: Value, search_type: SearchType) {
        self.dispatch(Action::SetSearchResults {
            results,
            search_type,
        });
    }

    pub fn set_search_error(&mut self, msg: impl Into<String>) {
        self.dispatch(Action::SetSearchError(msg.into()));
    }

    pub fn set_is_searching(&mut self, flag: bool) {
        self.dispatch(Action::SetIsSearching(flag));
    }

    pub fn add_to_history(&mut self, entry: HistoryEntry) {
        self.dispatch(Action::AddToHistory(entry));
    }

    pub fn clear_history(&mut self) {
        self.dispatch(Action::ClearHistory);
    }

    pub fn set_user_location(&mut self, location: Option<GeoPoint>, ip: Option<String>) {
        self.dispatch(Action::SetUserLocation { location, ip });
    }

    pub fn set_map_view(&mut self, center: [f64; 2], zoom: u8) {
        self.dispatch(Action::SetMapView { center, zoom });
    }

    pub fn set_selected_location(&mut self, location: Option<LocationItem>) {
        self.dispatch(Action::SetSelectedLocation(location));
    }

    pub fn add_comparison_item(&mut self, item: LocationItem) {
        self.dispatch(Action::AddComparisonItem(item));
    }

    pub fn remove_comparison_item(&mut self, id: impl Into<String>) {
        self.dispatch(Action::RemoveComparisonItem(id.into()));
    }

    pub fn clear_comparison(&mut self) {
        self.dispatch(Action::ClearComparison);
    }

    // -----------------------------------------------------------------------
    // SEARCH FLOW
    // -----------------------------------------------------------------------

    /// Sanitizes and classifies raw input before anything reaches the state.
    ///
    /// Returns the cleaned query and its type, after recording the query and
    /// entering the searching state. Unclassifiable input records an error
    /// instead and returns `None`.
    pub fn begin_search(&mut self, raw: &str) -> Option<(String, SearchType)> {
        let query = sanitize(raw);
        let kind = match classify_search_type(&query) {
            Some(kind) => kind,
            None if query.is_empty() => {
                self.set_search_error(messages::EMPTY_SEARCH);
                return None;
            }
            None => {
                self.set_search_query(query);
                self.set_search_error(messages::INVALID_COUNTRY);
                return None;
            }
        };
        self.set_search_query(query.clone());
        self.set_is_searching(true);
        Some((query, kind))
    }

    /// Stores the results and records the search in history.
    pub fn complete_search(&mut self, query: &str, kind: SearchType, results: Value) {
        self.set_search_results(results.clone(), kind);
        self.add_to_history(HistoryEntry::new(query, kind, Some(results)));
    }
}
