// crates/explorer-core/src/validate.rs

//! # Input Validators
//!
//! Pure classification and sanitizing of raw search input. Every function
//! here is total: bad input yields `false`/`None`, never an error.

use crate::config::constants::MAX_QUERY_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("static IPv4 pattern")
});

// Full, compressed, link-local with zone id, and IPv4-mapped/embedded forms.
static IPV6_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(",
        r"([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
        r"|([0-9a-fA-F]{1,4}:){1,7}:",
        r"|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
        r"|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}",
        r"|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}",
        r"|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}",
        r"|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}",
        r"|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})",
        r"|:((:[0-9a-fA-F]{1,4}){1,7}|:)",
        r"|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+",
        r"|::(ffff(:0{1,4})?:)?((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])",
        r"|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])",
        r")$"
    ))
    .expect("static IPv6 pattern")
});

static COUNTRY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s\-'.]+$").expect("static country name pattern"));

/// What a search string looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Ip,
    Country,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Ip => f.pad("ip"),
            SearchType::Country => f.pad("country"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        }
    }
}

/// Four dot-separated decimal octets, each 0–255.
///
/// ```rust
/// use explorer_core::validate::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("8.8.8.8"));
/// assert!(!is_valid_ipv4("256.1.1.1"));
/// assert!(!is_valid_ipv4("192.168"));
/// ```
pub fn is_valid_ipv4(s: &str) -> bool {
    !s.is_empty() && IPV4_RE.is_match(s)
}

/// Full, `::`-compressed and IPv4-mapped IPv6 forms.
pub fn is_valid_ipv6(s: &str) -> bool {
    !s.is_empty() && IPV6_RE.is_match(s)
}

pub fn ip_version(s: &str) -> Option<IpVersion> {
    if is_valid_ipv4(s) {
        Some(IpVersion::V4)
    } else if is_valid_ipv6(s) {
        Some(IpVersion::V6)
    } else {
        None
    }
}

/// Classifies a raw query.
///
/// - blank input → `None`
/// - IPv4/IPv6 after trimming → [`SearchType::Ip`]
/// - anything containing a letter or a space → [`SearchType::Country`]
/// - everything else (e.g. `"12345"`) is ambiguous → `None`
pub fn classify_search_type(query: &str) -> Option<SearchType> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    if ip_version(trimmed).is_some() {
        return Some(SearchType::Ip);
    }
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Some(SearchType::Country);
    }
    None
}

/// Trims, strips `<`, `>`, `'` and `"`, and caps the result at 100 chars.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .take(MAX_QUERY_CHARS)
        .collect()
}

/// At least two characters of letters, spaces, hyphens, apostrophes or periods.
///
/// Covers names like "United States", "Côte d'Ivoire" and "St. Lucia".
pub fn is_valid_country_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= 2 && COUNTRY_NAME_RE.is_match(trimmed)
}

pub fn format_ip_address(ip: &str) -> String {
    if ip.contains(':') {
        ip.replacen("::", " :: ", 1)
    } else {
        ip.to_string()
    }
}

/// Keeps digits, dots and colons; useful for partial IP input.
pub fn extract_ip_pattern(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ':'))
        .collect()
}
