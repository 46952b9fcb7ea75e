// crates/explorer-cli/src/main.rs

//! country-explorer: command-line interface for explorer-core
//!
//! Lists, searches and compares countries from the REST Countries catalog,
//! and keeps a small search history and theme preference on disk.
//!
//! Usage examples
//! --------------
//!
//! - List countries in a region, filtered by name
//!   $ country-explorer countries --region Europe --search land
//!
//! - Show one country with its neighbours
//!   $ country-explorer country PER
//!
//! - Search by name or IP address (recorded in history)
//!   $ country-explorer search "united"
//!   $ country-explorer search 2001:db8::1
//!   $ country-explorer history
//!
//! - Compare two countries
//!   $ country-explorer compare DEU FRA
//!
//! Data directory
//! --------------
//!
//! History (`searchHistory.json`), theme (`theme.json`) and a compressed
//! copy of the full catalog live in `--data-dir` (default
//! `.country-explorer`). The catalog copy is reused for an hour; pass
//! `--no-cache` to always go to the network.
mod args;

use crate::args::{CliArgs, Commands, ThemeCommand};
use anyhow::{anyhow, bail};
use clap::Parser;
use explorer_core::config::constants::{map, messages};
use explorer_core::prelude::*;
use explorer_core::store::GeoPoint;
use explorer_core::validate::{format_ip_address, ip_version, is_valid_country_name};
use log::{debug, LevelFilter};
use serde_json::json;
use std::time::Duration;

// -----------------------------------------------------------------------------
// GATEWAY SELECTION
// -----------------------------------------------------------------------------

/// The gateway the commands run against: plain HTTP, or HTTP behind the
/// on-disk catalog cache.
enum Catalog {
    Direct(HttpGateway),
    #[cfg(feature = "compact")]
    Cached(CachedGateway<HttpGateway>),
}

impl Catalog {
    #[cfg_attr(not(feature = "compact"), allow(unused_variables))]
    fn new(config: &ExplorerConfig, no_cache: bool) -> explorer_core::Result<Self> {
        let http = HttpGateway::new(config)?;
        #[cfg(feature = "compact")]
        if !no_cache {
            return Ok(Catalog::Cached(CachedGateway::from_config(http, config)));
        }
        Ok(Catalog::Direct(http))
    }

    fn http(&self) -> &HttpGateway {
        match self {
            Catalog::Direct(g) => g,
            #[cfg(feature = "compact")]
            Catalog::Cached(g) => g.inner(),
        }
    }
}

impl CountryGateway for Catalog {
    async fn fetch_all_countries(&self) -> Vec<Country> {
        match self {
            Catalog::Direct(g) => g.fetch_all_countries().await,
            #[cfg(feature = "compact")]
            Catalog::Cached(g) => g.fetch_all_countries().await,
        }
    }

    async fn fetch_country_by_code(&self, code: &str) -> Option<Country> {
        match self {
            Catalog::Direct(g) => g.fetch_country_by_code(code).await,
            #[cfg(feature = "compact")]
            Catalog::Cached(g) => g.fetch_country_by_code(code).await,
        }
    }

    async fn fetch_countries_by_codes(&self, codes: &[String]) -> Vec<Country> {
        match self {
            Catalog::Direct(g) => g.fetch_countries_by_codes(codes).await,
            #[cfg(feature = "compact")]
            Catalog::Cached(g) => g.fetch_countries_by_codes(codes).await,
        }
    }
}

// -----------------------------------------------------------------------------
// ENTRY POINT
// -----------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());

    let mut config = ExplorerConfig::default();
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }
    debug!("Using {config:?}");

    let mut storage = FileStorage::new(&config.data_dir);

    match args.command {
        Commands::Countries { search, region } => {
            let session = CountryListSession::new(Catalog::new(&config, args.no_cache)?);
            session.mount().await;
            if let Some(err) = session.error() {
                bail!(err);
            }
            session.set_search_query(search);
            session.set_selected_region(region);
            for c in session.countries().iter() {
                println!(
                    "{:<4} {:<36} {:<10} {:<20} {:>15}",
                    c.cca3,
                    c.common_name(),
                    c.region(),
                    c.capital(),
                    c.formatted_population()
                );
            }
            println!(
                "Showing {} of {} countries",
                session.filtered_count(),
                session.total_countries()
            );
        }

        Commands::Regions => {
            let session = CountryListSession::new(Catalog::new(&config, args.no_cache)?);
            session.mount().await;
            if let Some(err) = session.error() {
                bail!(err);
            }
            for region in session.available_regions().iter() {
                println!("{region}");
            }
        }

        Commands::Country { code } => {
            let session = CountryDetailSession::new(Catalog::new(&config, args.no_cache)?);
            session.load(Some(&code)).await;
            if let Some(err) = session.error() {
                bail!("{err}: {code}");
            }
            let country = session
                .country()
                .ok_or_else(|| anyhow!(messages::COUNTRY_NOT_FOUND))?;
            print_country(&country);
            if session.has_borders() {
                println!("Border countries:");
                for b in session.border_countries() {
                    println!("  - {} ({})", b.common_name(), b.cca3);
                }
            }
        }

        Commands::Classify { query } => {
            let query = sanitize(&query);
            match classify_search_type(&query) {
                Some(SearchType::Ip) => {
                    let version = ip_version(&query).map(|v| v.as_str()).unwrap_or("IP");
                    println!("ip ({version})");
                }
                Some(SearchType::Country) if is_valid_country_name(&query) => {
                    println!("country");
                }
                Some(SearchType::Country) => {
                    println!("country (contains characters unusual for a country name)");
                }
                None => println!("unknown"),
            }
        }

        Commands::Search { query } => {
            let catalog = Catalog::new(&config, args.no_cache)?;
            let mut store = GeoStore::new(&mut storage);
            search(&catalog, &mut store, &query).await?;
        }

        Commands::History { clear } => {
            let mut store = GeoStore::new(&mut storage);
            if clear {
                store.clear_history();
                println!("Search history cleared");
            } else if store.state().search_history.is_empty() {
                println!("No recent searches");
            } else {
                for entry in &store.state().search_history {
                    println!(
                        "{}  {:<7}  {}",
                        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        entry.kind,
                        entry.query
                    );
                }
            }
        }

        Commands::Compare { codes } => {
            let catalog = Catalog::new(&config, args.no_cache)?;
            let countries = catalog.fetch_countries_by_codes(&codes).await;
            if countries.is_empty() {
                bail!("{} {}", messages::COUNTRY_NOT_FOUND, codes.join(", "));
            }
            let mut store = GeoStore::new(&mut storage);
            for code in &codes {
                if let Some(c) = find_by_code(&countries, code) {
                    store.add_comparison_item(comparison_item(c));
                }
            }
            let selected: Vec<&Country> = store
                .state()
                .comparison_items
                .iter()
                .filter_map(|item| find_by_code(&countries, &item.id))
                .collect();
            print_comparison(&selected);
        }

        Commands::Theme { action } => {
            let current = Theme::load(&storage, system_prefers_dark());
            let theme = match action {
                ThemeCommand::Show => current,
                ThemeCommand::Toggle => current.toggle(&mut storage),
                ThemeCommand::Dark => {
                    Theme::Dark.save(&mut storage);
                    Theme::Dark
                }
                ThemeCommand::Light => {
                    Theme::Light.save(&mut storage);
                    Theme::Light
                }
            };
            println!("{theme}");
        }

        Commands::Ping => {
            let catalog = Catalog::new(&config, true)?;
            let http = catalog.http();
            if http.test_connection().await {
                println!("{} is reachable", http.base_url());
            } else {
                bail!("{} is not reachable", http.base_url());
            }
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder
        .filter_module("reqwest", LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Info)
        .init();
}

/// Reads the terminal background from `COLORFGBG` ("fg;bg"); dark when the
/// background is one of the dark ANSI colors.
fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .map(|bg| bg < 7 || bg == 8)
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// SEARCH
// -----------------------------------------------------------------------------

async fn search<G, S>(catalog: &G, store: &mut GeoStore<S>, raw: &str) -> anyhow::Result<()>
where
    G: CountryGateway,
    S: KeyValueStorage,
{
    let Some((query, kind)) = store.begin_search(raw) else {
        let reason = store.state().search_error.clone().unwrap_or_default();
        bail!(reason);
    };

    match kind {
        SearchType::Ip => {
            let version = ip_version(&query).map(|v| v.as_str()).unwrap_or("IP");
            println!("{version} address: {}", format_ip_address(&query));
            let result = json!({ "ip": query, "version": version });
            store.complete_search(&query, kind, result);
        }
        SearchType::Country => {
            let all = catalog.fetch_all_countries().await;
            if all.is_empty() {
                store.set_search_error(messages::NO_COUNTRIES);
                bail!(messages::NO_COUNTRIES);
            }
            let matches = filter_countries(&all, &query, "");
            if matches.is_empty() {
                store.set_search_error(messages::NO_MATCHING_COUNTRY);
                bail!(messages::NO_MATCHING_COUNTRY);
            }
            let exact = find_by_name(&matches, &query);
            if let Some(c) = exact {
                println!("{:<4} {} ({})", c.cca3, c.common_name(), c.region());
            }
            for c in matches.iter().filter(|c| exact.map_or(true, |e| e.cca3 != c.cca3)) {
                println!("{:<4} {} ({})", c.cca3, c.common_name(), c.region());
            }
            let focus = exact.or(match matches.as_slice() {
                [only] => Some(only),
                _ => None,
            });
            if let Some(c) = focus {
                if let [lat, lon, ..] = c.latlng[..] {
                    store.set_map_view([lat, lon], map::COUNTRY_ZOOM);
                }
            }
            let summary: Vec<_> = matches
                .iter()
                .map(|c| json!({ "cca3": c.cca3, "name": c.common_name() }))
                .collect();
            store.complete_search(&query, kind, json!(summary));
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// OUTPUT
// -----------------------------------------------------------------------------

fn print_country(c: &Country) {
    println!("Country: {}", c.common_name());
    println!("Official name: {}", c.official_name());
    println!("Native name: {}", c.native_name());
    println!("Code: {}", c.code());
    println!("Capital: {}", c.capital());
    println!("Region: {}", c.region());
    println!("Subregion: {}", c.subregion());
    println!("Population: {}", c.formatted_population());
    println!("Top level domain: {}", c.top_level_domain());
    println!("Currencies: {}", c.currencies_label());
    println!("Languages: {}", c.languages_label());
    println!("Flag: {}", c.flag_url());
}

fn comparison_item(c: &Country) -> LocationItem {
    let mut item = LocationItem::new(c.cca3.clone(), c.common_name());
    if let [lat, lon, ..] = c.latlng[..] {
        item.coordinates = Some(GeoPoint { lat, lon });
    }
    item
}

fn print_comparison(countries: &[&Country]) {
    let rows: [(&str, fn(&Country) -> String); 7] = [
        ("Name", |c| c.common_name().to_string()),
        ("Capital", |c| c.capital().to_string()),
        ("Region", |c| c.region().to_string()),
        ("Subregion", |c| c.subregion().to_string()),
        ("Population", |c| c.formatted_population()),
        ("Currencies", |c| c.currencies_label()),
        ("Languages", |c| c.languages_label()),
    ];
    for (label, value) in rows {
        print!("{label:<12}");
        for c in countries {
            print!(" {:<30}", value(c));
        }
        println!();
    }
}
