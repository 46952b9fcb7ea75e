// crates/explorer-core/tests/common/mod.rs
#![allow(dead_code)]

use explorer_core::{ExplorerConfig, HttpGateway};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

pub fn country_json(name: &str, code: &str, region: &str, borders: &[&str]) -> Value {
    json!({
        "name": { "common": name, "official": format!("Republic of {name}") },
        "cca3": code,
        "region": region,
        "capital": [format!("{name} City")],
        "population": 1_000_000,
        "borders": borders,
    })
}

pub fn sample_catalog() -> Value {
    json!([
        country_json("Peru", "PER", "Americas", &["BOL", "CHL"]),
        country_json("Chile", "CHL", "Americas", &["PER"]),
        country_json("Bolivia", "BOL", "Americas", &["PER"]),
        country_json("Iceland", "ISL", "Europe", &[]),
        country_json("Finland", "FIN", "Europe", &["SWE"]),
    ])
}

pub fn config_for(server: &MockServer) -> ExplorerConfig {
    ExplorerConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2))
}

pub fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(&config_for(server)).expect("client builds")
}
