// crates/explorer-core/src/gateway/http.rs
use super::CountryGateway;
use crate::config::constants::{LIST_FIELDS, PROBE_CODE};
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::model::Country;
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `/alpha/{code}` answers with an array; some mirrors answer with the object.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Country>),
    One(Box<Country>),
}

impl OneOrMany {
    fn into_first(self) -> Option<Country> {
        match self {
            OneOrMany::Many(list) => list.into_iter().next(),
            OneOrMany::One(c) => Some(*c),
        }
    }
}

/// Gateway backed by the REST Countries v3.1 HTTP API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    alternative_url: String,
}

impl HttpGateway {
    /// Builds the client with the configured request timeout.
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("country-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &ExplorerConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            alternative_url: config.alternative_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `/alpha/usa`; `true` when the catalog answers with a 2xx.
    pub async fn test_connection(&self) -> bool {
        info!("Testing API connection...");
        let url = match self.endpoint(&["alpha", PROBE_CODE]) {
            Ok(url) => url,
            Err(e) => {
                error!("API test failed: {e}");
                return false;
            }
        };
        match self.client.get(url).send().await {
            Ok(resp) => {
                let ok = resp.status().is_success();
                info!("API status: {}", if ok { "working" } else { "not working" });
                ok
            }
            Err(e) => {
                error!("API test failed: {e}");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // INTERNAL REQUEST HELPERS
    // -----------------------------------------------------------------------

    /// `base_url` followed by `segments`, each encoded as exactly one path
    /// segment (`/`, `?` and `#` inside a segment are escaped).
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = parse_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                ExplorerError::InvalidData(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET + status check + JSON decode. 404 maps to `NotFound`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ExplorerError::NotFound("Country not found".into()));
        }
        if !status.is_success() {
            return Err(ExplorerError::Status(status.as_u16()));
        }
        Ok(resp.json::<T>().await?)
    }

    /// Primary reduced-field request, then one retry without `fields`.
    async fn try_fetch_all(&self) -> Result<Vec<Country>> {
        let all_url = self.endpoint(&["all"])?;
        let mut primary_url = all_url.clone();
        primary_url
            .query_pairs_mut()
            .append_pair("fields", LIST_FIELDS);

        debug!("GET {primary_url}");
        let resp = self.client.get(primary_url).send().await?;
        let status = resp.status();
        if status.is_success() {
            let countries: Vec<Country> = resp.json().await?;
            info!("Fetched {} countries", countries.len());
            return Ok(countries);
        }

        error!("API response status: {}", status.as_u16());
        info!("Trying fallback request without fields parameter...");
        let countries: Vec<Country> = self.get_json(all_url).await?;
        info!("Fetched {} countries (fallback)", countries.len());
        Ok(countries)
    }
}

impl CountryGateway for HttpGateway {
    async fn fetch_all_countries(&self) -> Vec<Country> {
        info!("Fetching all countries from {}", self.base_url);
        let err = match self.try_fetch_all().await {
            Ok(countries) => return countries,
            Err(e) => e,
        };
        error!("Error fetching countries: {err}");

        info!("Trying alternative API endpoint...");
        let alternative = async {
            let url = parse_url(&self.alternative_url)?;
            self.get_json::<Vec<Country>>(url).await
        };
        match alternative.await {
            Ok(countries) => {
                info!("Fetched {} countries (alternative)", countries.len());
                countries
            }
            Err(e) => {
                error!("All API attempts failed: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_country_by_code(&self, code: &str) -> Option<Country> {
        let code = code.trim();
        if code.is_empty() {
            warn!("Refusing to fetch a country without a code");
            return None;
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            warn!("Refusing to fetch malformed country code {code:?}");
            return None;
        }
        info!("Fetching country details for: {code}");
        let lookup = async {
            let url = self.endpoint(&["alpha", code])?;
            self.get_json::<OneOrMany>(url).await
        };
        match lookup.await {
            Ok(body) => {
                let country = body.into_first();
                match &country {
                    Some(c) => info!("Fetched details for: {}", c.common_name()),
                    None => warn!("Empty response for country {code}"),
                }
                country
            }
            Err(e) => {
                error!("Error fetching country {code}: {e}");
                None
            }
        }
    }

    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country> {
        if codes.is_empty() {
            return Vec::new();
        }
        info!("Fetching {} countries by code...", codes.len());
        let lookup = async {
            let mut url = self.endpoint(&["alpha"])?;
            url.query_pairs_mut().append_pair("codes", &codes.join(","));
            self.get_json::<Vec<Country>>(url).await
        };
        match lookup.await {
            Ok(countries) => {
                info!("Fetched {} countries by code", countries.len());
                countries
            }
            Err(e) => {
                error!("Error fetching countries by code: {e}");
                Vec::new()
            }
        }
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ExplorerError::InvalidData(format!("invalid URL {raw}: {e}")))
}
