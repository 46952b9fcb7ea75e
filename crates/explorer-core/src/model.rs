// crates/explorer-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder shown for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// A country record as served by the remote catalog.
///
/// Records are immutable once fetched. Every field is lenient because the
/// reduced-field list request only carries a handful of them.
///
/// The struct is also the payload of the bincode collection cache, so it only
/// uses shapes bincode can round-trip (no `skip_serializing_if`, no
/// untagged or flattened members).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub name: CountryName,
    pub flags: Flags,
    pub population: u64,
    pub region: String,
    pub subregion: Option<String>,
    pub capital: Vec<String>,
    pub cca2: Option<String>,
    pub cca3: String,
    pub borders: Vec<String>,
    pub tld: Vec<String>,
    pub currencies: BTreeMap<String, Currency>,
    pub languages: BTreeMap<String, String>,
    pub latlng: Vec<f64>,
    pub area: Option<f64>,
    pub independent: Option<bool>,
    pub timezones: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    #[serde(rename = "nativeName")]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn code(&self) -> &str {
        &self.cca3
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> &str {
        self.subregion
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }

    /// First listed capital, or `N/A`.
    pub fn capital(&self) -> &str {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Native name in the first listed language: common, then official.
    pub fn native_name(&self) -> &str {
        self.name
            .native_name
            .values()
            .next()
            .and_then(|n| {
                [n.common.as_str(), n.official.as_str()]
                    .into_iter()
                    .find(|s| !s.is_empty())
            })
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn top_level_domain(&self) -> &str {
        self.tld.first().map(String::as_str).unwrap_or(NOT_AVAILABLE)
    }

    /// Comma-joined currency names, or `N/A`.
    pub fn currencies_label(&self) -> String {
        join_or_na(self.currencies.values().map(|c| c.name.as_str()))
    }

    /// Comma-joined language names, or `N/A`.
    pub fn languages_label(&self) -> String {
        join_or_na(self.languages.values().map(String::as_str))
    }

    /// PNG flag, then SVG, then empty.
    pub fn flag_url(&self) -> &str {
        if !self.flags.png.is_empty() {
            &self.flags.png
        } else {
            &self.flags.svg
        }
    }

    pub fn formatted_population(&self) -> String {
        format_number(self.population)
    }
}

fn join_or_na<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = items.filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

/// Formats with comma thousands separators; zero renders as `N/A`.
pub fn format_number(n: u64) -> String {
    if n == 0 {
        return NOT_AVAILABLE.to_string();
    }
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
