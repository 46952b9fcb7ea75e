// crates/explorer-core/src/store/state.rs
use crate::config::constants::map;
use crate::validate::SearchType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A past search: the query, how it was classified, when, and what it found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    #[serde(rename = "type")]
    pub kind: SearchType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub result: Option<Value>,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, kind: SearchType, result: Option<Value>) -> Self {
        Self {
            query: query.into(),
            kind,
            timestamp: Utc::now(),
            result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Something that can be selected on the map or compared side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl LocationItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: None,
            data: None,
        }
    }
}

/// Map viewport; always replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: map::DEFAULT_CENTER,
            zoom: map::DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoState {
    pub search_query: String,
    pub search_type: Option<SearchType>,
    pub search_results: Option<Value>,
    /// Newest first, at most `MAX_HISTORY_ITEMS`.
    pub search_history: Vec<HistoryEntry>,
    pub is_searching: bool,
    pub search_error: Option<String>,
    pub user_location: Option<GeoPoint>,
    #[serde(rename = "userIP")]
    pub user_ip: Option<String>,
    pub map_view: MapView,
    pub selected_location: Option<LocationItem>,
    pub comparison_mode: bool,
    /// Oldest first, at most `MAX_COMPARISON_ITEMS`.
    pub comparison_items: Vec<LocationItem>,
}
