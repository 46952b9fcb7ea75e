// crates/explorer-core/tests/sessions.rs
mod common;

use common::{country_json, gateway_for, sample_catalog};
use explorer_core::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_session_filters_the_live_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let session = CountryListSession::new(gateway_for(&server));
    session.mount().await;
    session.mount().await;
    assert_eq!(session.state(), LoadStatus::Ready);
    assert_eq!(session.total_countries(), 5);
    assert_eq!(session.available_regions().as_slice(), ["Americas", "Europe"]);

    session.set_selected_region("Europe");
    session.set_search_query("LAND");
    let names: Vec<String> = session
        .countries()
        .iter()
        .map(|c| c.common_name().to_string())
        .collect();
    assert_eq!(names, ["Iceland", "Finland"]);
    assert_eq!(session.filtered_count(), 2);
}

#[tokio::test]
async fn list_session_reports_unreachable_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let session = CountryListSession::new(gateway_for(&server));
    session.mount().await;
    assert_eq!(session.error().as_deref(), Some("No countries data received"));
    assert!(session.countries().is_empty());
}

#[tokio::test]
async fn detail_session_loads_country_and_borders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/PER"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([country_json("Peru", "PER", "Americas", &["BOL", "CHL"])])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .and(query_param("codes", "BOL,CHL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            country_json("Bolivia", "BOL", "Americas", &["PER"]),
            country_json("Chile", "CHL", "Americas", &["PER"]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let session = CountryDetailSession::new(gateway_for(&server));
    session.load(Some("PER")).await;
    assert!(session.is_valid_country());
    assert!(!session.is_loading());
    assert!(!session.is_borders_loading());
    assert_eq!(session.country().unwrap().common_name(), "Peru");
    let borders: Vec<String> = session
        .border_countries()
        .into_iter()
        .map(|c| c.cca3)
        .collect();
    assert_eq!(borders, ["BOL", "CHL"]);
}

#[tokio::test]
async fn detail_session_unknown_code_is_not_found() {
    let server = MockServer::start().await;

    let session = CountryDetailSession::new(gateway_for(&server));
    session.load(Some("XYZ")).await;
    assert_eq!(session.error().as_deref(), Some("Country not found"));
    assert!(session.country().is_none());
}

#[tokio::test]
async fn detail_session_border_failure_keeps_the_country() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/PER"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([country_json("Peru", "PER", "Americas", &["BOL"])])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alpha"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = CountryDetailSession::new(gateway_for(&server));
    session.load(Some("PER")).await;
    assert!(session.error().is_none());
    assert_eq!(session.country().unwrap().borders, vec!["BOL".to_string()]);
    assert!(!session.has_borders());
    assert!(session.border_countries().is_empty());
    assert!(!session.is_borders_loading());
}
