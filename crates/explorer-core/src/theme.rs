// crates/explorer-core/src/theme.rs

//! # Theme Preference
//!
//! A two-valued color theme persisted under the `theme` key. Only a stored
//! `dark` selects dark mode; any other stored value means light. When nothing
//! is stored the caller-supplied system preference decides.

use crate::config::constants::storage_keys;
use crate::storage::KeyValueStorage;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Reads the stored theme, falling back to the system preference when the
    /// key is absent, empty or unreadable.
    pub fn load<S: KeyValueStorage>(storage: &S, system_prefers_dark: bool) -> Self {
        let fallback = if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        match storage.get_item(storage_keys::THEME) {
            Ok(Some(raw)) if raw.is_empty() => fallback,
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                debug!("Treating stored theme {raw:?} as light");
                Theme::Light
            }),
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to read theme: {e}");
                fallback
            }
        }
    }

    /// Persists the theme. Failures are logged only.
    pub fn save<S: KeyValueStorage>(self, storage: &mut S) {
        if let Err(e) = storage.set_item(storage_keys::THEME, self.as_str()) {
            warn!("Failed to save theme: {e}");
        }
    }

    /// Flips the theme, persists it and returns the new value.
    pub fn toggle<S: KeyValueStorage>(self, storage: &mut S) -> Self {
        let next = self.toggled();
        next.save(storage);
        next
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
