// crates/explorer-core/src/store/action.rs
use super::state::{GeoPoint, HistoryEntry, LocationItem};
use crate::validate::SearchType;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Value};

/// Commands accepted by the geo search store.
///
/// On the wire an action is `{"type": "ADD_TO_HISTORY", "payload": ...}`.
/// A `type` this enum does not know decodes to [`Action::Unknown`] whatever
/// its payload, and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetSearchQuery(String),
    SetSearchResults {
        results: Value,
        #[serde(rename = "type")]
        search_type: SearchType,
    },
    SetSearchError(String),
    SetIsSearching(bool),
    AddToHistory(HistoryEntry),
    ClearHistory,
    SetUserLocation {
        location: Option<GeoPoint>,
        ip: Option<String>,
    },
    SetMapView {
        center: [f64; 2],
        zoom: u8,
    },
    SetSelectedLocation(Option<LocationItem>),
    AddComparisonItem(LocationItem),
    RemoveComparisonItem(String),
    ClearComparison,
    Unknown,
}

#[derive(Deserialize)]
struct SearchResultsPayload {
    results: Value,
    #[serde(rename = "type")]
    search_type: SearchType,
}

#[derive(Deserialize)]
struct UserLocationPayload {
    #[serde(default)]
    location: Option<GeoPoint>,
    #[serde(default)]
    ip: Option<String>,
}

#[derive(Deserialize)]
struct MapViewPayload {
    center: [f64; 2],
    zoom: u8,
}

impl Action {
    /// Builds an action from its wire tag and payload.
    ///
    /// Unknown tags yield [`Action::Unknown`] without looking at the payload;
    /// a known tag with a malformed payload is an error.
    pub fn from_parts(kind: &str, payload: Value) -> serde_json::Result<Self> {
        let action = match kind {
            "SET_SEARCH_QUERY" => Action::SetSearchQuery(from_value(payload)?),
            "SET_SEARCH_RESULTS" => {
                let p: SearchResultsPayload = from_value(payload)?;
                Action::SetSearchResults {
                    results: p.results,
                    search_type: p.search_type,
                }
            }
            "SET_SEARCH_ERROR" => Action::SetSearchError(from_value(payload)?),
            "SET_IS_SEARCHING" => Action::SetIsSearching(from_value(payload)?),
            "ADD_TO_HISTORY" => Action::AddToHistory(from_value(payload)?),
            "CLEAR_HISTORY" => Action::ClearHistory,
            "SET_USER_LOCATION" => {
                let p: UserLocationPayload = from_value(payload)?;
                Action::SetUserLocation {
                    location: p.location,
                    ip: p.ip,
                }
            }
            "SET_MAP_VIEW" => {
                let p: MapViewPayload = from_value(payload)?;
                Action::SetMapView {
                    center: p.center,
                    zoom: p.zoom,
                }
            }
            "SET_SELECTED_LOCATION" => Action::SetSelectedLocation(from_value(payload)?),
            "ADD_COMPARISON_ITEM" => Action::AddComparisonItem(from_value(payload)?),
            "REMOVE_COMPARISON_ITEM" => Action::RemoveComparisonItem(from_value(payload)?),
            "CLEAR_COMPARISON" => Action::ClearComparison,
            _ => Action::Unknown,
        };
        Ok(action)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            payload: Value,
        }

        let wire = Wire::deserialize(deserializer)?;
        Action::from_parts(&wire.kind, wire.payload).map_err(de::Error::custom)
    }
}

/// Side effects requested by a transition; the store runs them against its
/// storage port.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistHistory(Vec<HistoryEntry>),
    RemoveHistory,
}
